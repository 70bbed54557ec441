//! 控制面板外壳：可折叠侧栏、顶栏、统计卡片
//!
//! 管理员与向导的面板共用这一外壳，只是侧栏分组不同。

use crate::auth::{logout, use_auth};
use crate::components::icons::{Calendar, ChevronDown, LogOut, Menu, Mountain, Tag, Users};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use trekhub::route::AppRoute;
use trekhub_shared::Role;

/// 侧栏分组
#[derive(Clone)]
pub struct NavSection {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: fn() -> AnyView,
    /// 无子项时点击直接导航
    pub target: Option<AppRoute>,
    pub items: Vec<(&'static str, AppRoute)>,
}

pub fn admin_sections() -> Vec<NavSection> {
    vec![
        NavSection {
            id: "dashboard",
            name: "Dashboard",
            icon: || view! { <Mountain attr:class="w-5 h-5" /> }.into_any(),
            target: Some(AppRoute::AdminDashboard),
            items: vec![],
        },
        NavSection {
            id: "treks",
            name: "Trek Management",
            icon: || view! { <Mountain attr:class="w-5 h-5" /> }.into_any(),
            target: None,
            items: vec![
                ("All Treks", AppRoute::AllTreks),
                ("Add Trek", AppRoute::AddTrek),
            ],
        },
        NavSection {
            id: "guides",
            name: "Guide Management",
            icon: || view! { <Users attr:class="w-5 h-5" /> }.into_any(),
            target: None,
            items: vec![("All Guides", AppRoute::AllGuides)],
        },
        NavSection {
            id: "reservations",
            name: "Reservations",
            icon: || view! { <Calendar attr:class="w-5 h-5" /> }.into_any(),
            target: None,
            items: vec![("All Bookings", AppRoute::AllReservations)],
        },
        NavSection {
            id: "categories",
            name: "Categories",
            icon: || view! { <Tag attr:class="w-5 h-5" /> }.into_any(),
            target: None,
            items: vec![
                ("All Categories", AppRoute::AllCategories),
                ("Add Category", AppRoute::AddCategory),
            ],
        },
    ]
}

pub fn guide_sections(guide_id: i64) -> Vec<NavSection> {
    vec![
        NavSection {
            id: "dashboard",
            name: "Dashboard",
            icon: || view! { <Mountain attr:class="w-5 h-5" /> }.into_any(),
            target: Some(AppRoute::GuideDashboard),
            items: vec![],
        },
        NavSection {
            id: "profile",
            name: "My Profile",
            icon: || view! { <Users attr:class="w-5 h-5" /> }.into_any(),
            target: None,
            items: vec![
                ("Public profile", AppRoute::GuideProfile(guide_id)),
                ("Community", AppRoute::Community),
            ],
        },
    ]
}

#[component]
pub fn Sidebar(
    title: &'static str,
    sections: Vec<NavSection>,
    is_open: RwSignal<bool>,
) -> impl IntoView {
    let router = use_router();
    // 同一时间只展开一个分组
    let active = RwSignal::new(Option::<&'static str>::None);

    view! {
        <aside class=move || {
            let width = if is_open.get() { "w-64" } else { "w-20" };
            format!("{} bg-neutral text-neutral-content transition-all duration-300 fixed h-full z-10", width)
        }>
            <div class="p-4 flex items-center justify-between">
                <Show when=move || is_open.get()>
                    <h2 class="font-bold text-xl">{title}</h2>
                </Show>
                <button
                    class="btn btn-ghost btn-sm btn-square"
                    aria-label="Toggle sidebar"
                    on:click=move |_| is_open.update(|open| *open = !*open)
                >
                    <Menu attr:class="w-5 h-5" />
                </button>
            </div>

            <nav class="mt-4">
                {sections.into_iter().map(|section| {
                    let id = section.id;
                    let has_items = !section.items.is_empty();
                    let target = section.target;
                    let items = section.items.clone();
                    let on_click = move |_| match target {
                        Some(route) => router.navigate_to(route),
                        None => active.update(|a| *a = if *a == Some(id) { None } else { Some(id) }),
                    };
                    view! {
                        <div>
                            <button
                                class=move || {
                                    let base = "w-full flex items-center px-4 py-3 hover:bg-base-content/10";
                                    if active.get() == Some(id) { format!("{} bg-base-content/10", base) } else { base.to_string() }
                                }
                                on:click=on_click
                            >
                                <span class="mr-3">{(section.icon)()}</span>
                                <Show when=move || is_open.get()>
                                    <span class="flex-1 text-left">{section.name}</span>
                                    <Show when=move || has_items>
                                        <ChevronDown attr:class=move || {
                                            if active.get() == Some(id) { "w-5 h-5 rotate-180 transition-transform" } else { "w-5 h-5 transition-transform" }
                                        } />
                                    </Show>
                                </Show>
                            </button>
                            <Show when=move || is_open.get() && has_items && active.get() == Some(id)>
                                <div class="bg-base-content/5 py-2">
                                    {items.iter().map(|(label, route)| view! {
                                        <Link to=*route class="flex items-center px-11 py-2 text-sm opacity-70 hover:opacity-100">
                                            {*label}
                                        </Link>
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn DashboardHeader() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let user_name = move || {
        auth.session()
            .map(|s| s.user.display_name())
            .unwrap_or_default()
    };
    let on_logout = move |_| {
        logout(&auth);
        router.navigate_to(AppRoute::Login);
    };

    view! {
        <header class="navbar bg-base-100 shadow px-6">
            <div class="flex-1">
                <Link to=AppRoute::Home class="btn btn-ghost text-lg">"TrekHub"</Link>
            </div>
            <div class="flex-none gap-4">
                <span class="font-medium">{user_name}</span>
                <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            </div>
        </header>
    }
}

/// 面板外壳
#[component]
pub fn DashboardShell(role: Role, children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_open = RwSignal::new(true);

    let (title, sections) = match role {
        Role::Admin => ("Admin Panel", admin_sections()),
        _ => {
            let id = auth.session().map(|s| s.user.id).unwrap_or_default();
            ("Guide Panel", guide_sections(id))
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 flex">
            <Sidebar title=title sections=sections is_open=is_open />
            <div class=move || {
                let margin = if is_open.get() { "ml-64" } else { "ml-20" };
                format!("flex-1 {} transition-all duration-300", margin)
            }>
                <DashboardHeader />
                <main class="p-6">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat bg-base-100 rounded-box shadow">
            <div class="stat-title">{title}</div>
            <div class="stat-value text-primary">{value}</div>
            {description.map(|d| view! { <div class="stat-desc">{d}</div> })}
        </div>
    }
}
