//! 公共页面布局：导航栏、加载占位、404

use leptos::prelude::*;
use trekhub::guard::home_for;
use trekhub::route::AppRoute;
use trekhub_shared::Role;

use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, Mountain};
use crate::web::router::{Link, use_router};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let on_logout = move |_| {
        logout(&auth);
        router.navigate_to(AppRoute::Home);
    };

    view! {
        <div class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl gap-2">
                    <Mountain attr:class="h-6 w-6 text-primary" />
                    "TrekHub"
                </Link>
                <Link to=AppRoute::Community class="btn btn-ghost btn-sm hidden md:inline-flex">
                    "Community"
                </Link>
            </div>
            <div class="flex-none gap-2">
                {move || match auth.session() {
                    Some(session) => {
                        let home = match session.role() {
                            Role::Tourist => AppRoute::TouristProfile,
                            role => home_for(role),
                        };
                        view! {
                            <Link to=home class="btn btn-ghost btn-sm">
                                {session.user.display_name()}
                            </Link>
                            <button class="btn btn-outline btn-sm gap-2" on:click=on_logout>
                                <LogOut attr:class="h-4 w-4" />
                                "Logout"
                            </button>
                        }
                        .into_any()
                    }
                    None => view! {
                        <Link to=AppRoute::Login class="btn btn-ghost btn-sm">"Login"</Link>
                        <Link to=AppRoute::RegisterTourist class="btn btn-primary btn-sm">
                            "Sign up"
                        </Link>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

/// 带导航栏的公共页面
#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <main class="max-w-7xl mx-auto p-4 md:p-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// 加载失败时的提示与重试
#[component]
pub fn LoadError(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error">
            <span>{message}</span>
            <button class="btn btn-sm" on:click=move |_| on_retry.run(())>"Retry"</button>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
                <Link to=AppRoute::Home class="btn btn-primary mt-6">"Back home"</Link>
            </div>
        </div>
    }
}
