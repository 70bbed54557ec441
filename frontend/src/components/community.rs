//! 社区页：主区域展示向导，右侧栏为按最近预订排序的热门向导
//!
//! 窄屏下侧栏可折叠，点击侧栏以外区域（遮罩层）关闭。

use crate::auth::use_auth;
use crate::components::icons::{ChevronLeft, Users, X};
use crate::components::layout::{LoadError, PublicLayout, Spinner};
use crate::components::load::{Load, load_into};
use crate::web::router::Link;
use leptos::prelude::*;
use trekhub::route::AppRoute;
use trekhub_shared::Guide;

const TOP_GUIDES: usize = 5;

#[component]
pub fn CommunityPage() -> impl IntoView {
    let auth = use_auth();
    let guides = RwSignal::new(Load::<Vec<Guide>>::Loading);
    let sidebar_open = RwSignal::new(false);

    let reload = move || {
        let api = auth.api();
        load_into(guides, async move { api.list_guides_by_reservation_date().await });
    };
    reload();

    let validated = move || {
        guides.with(|g| {
            g.ready()
                .map(|list| list.iter().filter(|g| g.validated).cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <PublicLayout>
            <div class="flex gap-6">
                <section class="flex-1 space-y-4">
                    <h1 class="text-3xl font-bold flex items-center gap-2">
                        <Users attr:class="h-7 w-7 text-primary" />
                        "Community"
                    </h1>
                    {move || guides.with(|state| match state {
                        Load::Loading => view! { <Spinner /> }.into_any(),
                        Load::Failed(message) => view! {
                            <LoadError message=message.clone() on_retry=move |_| reload() />
                        }.into_any(),
                        Load::Ready(list) => view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {list.iter().filter(|g| g.validated).cloned().map(|g| view! { <GuideCard guide=g /> }).collect_view()}
                            </div>
                        }.into_any(),
                    })}
                </section>

                // 窄屏切换按钮
                <button
                    class="lg:hidden fixed right-4 bottom-6 z-30 btn btn-circle btn-primary shadow-lg"
                    aria-label=move || if sidebar_open.get() { "Close sidebar" } else { "Open sidebar" }
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                >
                    {move || if sidebar_open.get() {
                        view! { <X attr:class="h-5 w-5" /> }.into_any()
                    } else {
                        view! { <ChevronLeft attr:class="h-5 w-5" /> }.into_any()
                    }}
                </button>

                // 遮罩层：点击侧栏以外区域关闭
                <Show when=move || sidebar_open.get()>
                    <div
                        class="lg:hidden fixed inset-0 bg-black/50 z-20"
                        on:click=move |_| sidebar_open.set(false)
                    ></div>
                </Show>

                <aside class=move || {
                    let base = "fixed lg:static top-0 right-0 h-full lg:h-auto w-72 z-30 lg:z-auto \
                                bg-base-100 lg:bg-transparent p-4 lg:p-0 transition-transform duration-300 lg:translate-x-0";
                    if sidebar_open.get() {
                        format!("{} translate-x-0", base)
                    } else {
                        format!("{} translate-x-full", base)
                    }
                }>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title text-lg">"Top guides"</h2>
                            <ul class="menu p-0">
                                {move || validated().into_iter().take(TOP_GUIDES).map(|g| view! {
                                    <li>
                                        <Link to=AppRoute::GuideProfile(g.id)>{g.full_name()}</Link>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    </div>
                </aside>
            </div>
        </PublicLayout>
    }
}

#[component]
fn GuideCard(guide: Guide) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{guide.full_name()}</h3>
                <p class="text-sm opacity-70 line-clamp-2">{guide.bio.clone().unwrap_or_default()}</p>
                <div class="flex gap-1 flex-wrap">
                    {guide.languages.iter().map(|l| view! { <span class="badge badge-outline badge-sm">{l.clone()}</span> }).collect_view()}
                </div>
                <div class="card-actions justify-end">
                    <Link to=AppRoute::GuideProfile(guide.id) class="btn btn-sm btn-primary">"Profile"</Link>
                </div>
            </div>
        </div>
    }
}
