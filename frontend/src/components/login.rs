use crate::auth::{login, use_auth};
use crate::components::icons::ShieldCheck;
use crate::components::layout::Spinner;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use trekhub::error::FieldErrors;
use trekhub::forms::{LoginDraft, LoginField};
use trekhub::guard::home_for;
use trekhub::route::AppRoute;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let field_errors = RwSignal::new(FieldErrors::<LoginField>::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = LoginDraft {
            email: email.get(),
            password: password.get(),
        };
        let request = match draft.validate() {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match login(&auth, request.email, request.password).await {
                // 路由服务也会因会话变化离开登录页，这里显式导航以保证落点
                Ok(role) => router.navigate_to(home_for(role)),
                Err(e) => set_error_msg.set(Some(e.message().to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    let field_error = move |field: LoginField| {
        move || field_errors.with(|e| e.get(&field).map(str::to_string))
    };

    view! {
        <Show when=move || !auth.is_loading() fallback=|| view! { <Spinner /> }>
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <div class="flex flex-col items-center gap-2">
                            <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                                <ShieldCheck attr:class="h-8 w-8" />
                            </div>
                            <h1 class="text-3xl font-bold">"Welcome back"</h1>
                            <p class="text-base-content/70">"Sign in to continue your adventure"</p>
                        </div>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="you@example.com"
                                    on:input=move |ev| {
                                        set_email.set(event_target_value(&ev));
                                        field_errors.update(|e| e.clear(&LoginField::Email));
                                    }
                                    prop:value=email
                                    class="input input-bordered"
                                />
                                <span class="text-error text-xs mt-1">{field_error(LoginField::Email)}</span>
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| {
                                        set_password.set(event_target_value(&ev));
                                        field_errors.update(|e| e.clear(&LoginField::Password));
                                    }
                                    prop:value=password
                                    class="input input-bordered"
                                />
                                <span class="text-error text-xs mt-1">{field_error(LoginField::Password)}</span>
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                    } else {
                                        "Sign in".into_any()
                                    }}
                                </button>
                            </div>
                            <div class="text-sm text-center mt-2 space-x-2">
                                <span>"New here?"</span>
                                <Link to=AppRoute::RegisterTourist class="link link-primary">"Join as a tourist"</Link>
                                <span>"or"</span>
                                <Link to=AppRoute::RegisterGuide class="link link-primary">"become a guide"</Link>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
