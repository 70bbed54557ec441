//! 向导管理：审核新注册的向导，或撤销已有的审核
//!
//! 后端的 `PATCH /auth/validate-guide/:id` 每次调用都会翻转审核状态，
//! 所以两个按钮走同一个接口，本地状态只在成功后重新拉取。

use crate::auth::use_auth;
use crate::components::dashboard::DashboardShell;
use crate::components::icons::{RefreshCw, ShieldCheck};
use crate::components::layout::{LoadError, Spinner};
use crate::components::load::{Load, load_into};
use crate::components::toast::{Notice, Toast, notice_signal};
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use trekhub::route::AppRoute;
use trekhub_shared::{Guide, Role};

#[component]
pub fn AllGuidesPage() -> impl IntoView {
    let auth = use_auth();
    let guides = RwSignal::new(Load::<Vec<Guide>>::Loading);
    let notice = notice_signal();
    // 正在提交审核的向导
    let pending = RwSignal::new(Option::<i64>::None);

    let reload = move || {
        let api = auth.api();
        load_into(guides, async move { api.list_guides().await });
    };
    reload();

    let handle_toggle = move |guide_id: i64, was_validated: bool| {
        if pending.get_untracked().is_some() {
            return;
        }
        pending.set(Some(guide_id));
        let api = auth.api();
        spawn_local(async move {
            let result = api.validate_guide(guide_id).await;
            let _ = pending.try_set(None);
            match result {
                Ok(()) => {
                    let text = if was_validated { "Validation revoked" } else { "Guide validated" };
                    let _ = notice.try_set(Some(Notice::success(text)));
                    reload();
                }
                Err(e) => {
                    let _ = notice.try_set(Some(Notice::error(e.message())));
                }
            }
        });
    };

    view! {
        <DashboardShell role=Role::Admin>
            <Toast notice=notice />
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="flex items-center justify-between p-6 pb-2">
                        <h1 class="card-title">"Guides"</h1>
                        <button class="btn btn-ghost btn-sm btn-square" aria-label="Refresh" on:click=move |_| reload()>
                            <RefreshCw attr:class="h-4 w-4" />
                        </button>
                    </div>
                    {move || guides.with(|state| match state {
                        Load::Loading => view! { <Spinner /> }.into_any(),
                        Load::Failed(message) => view! {
                            <div class="p-6"><LoadError message=message.clone() on_retry=move |_| reload() /></div>
                        }.into_any(),
                        Load::Ready(list) if list.is_empty() => view! {
                            <p class="text-center py-8 opacity-50">"No guides registered yet."</p>
                        }.into_any(),
                        Load::Ready(list) => view! {
                            <div class="overflow-x-auto w-full">
                                <table class="table table-zebra w-full">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th class="hidden md:table-cell">"Email"</th>
                                            <th class="hidden md:table-cell">"Phone"</th>
                                            <th>"Status"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list.iter().map(|guide| {
                                            let id = guide.id;
                                            let validated = guide.validated;
                                            view! {
                                                <tr>
                                                    <td>
                                                        <Link to=AppRoute::GuideProfile(id) class="link link-hover font-semibold">
                                                            {guide.full_name()}
                                                        </Link>
                                                    </td>
                                                    <td class="hidden md:table-cell">{guide.email.clone().unwrap_or_default()}</td>
                                                    <td class="hidden md:table-cell">{guide.phone.clone().unwrap_or_default()}</td>
                                                    <td>
                                                        {if validated {
                                                            view! { <span class="badge badge-success">"Validated"</span> }.into_any()
                                                        } else {
                                                            view! { <span class="badge badge-warning">"Pending"</span> }.into_any()
                                                        }}
                                                    </td>
                                                    <td class="text-right">
                                                        <button
                                                            class={if validated { "btn btn-outline btn-warning btn-sm gap-2" } else { "btn btn-primary btn-sm gap-2" }}
                                                            disabled=move || pending.get().is_some()
                                                            on:click=move |_| handle_toggle(id, validated)
                                                        >
                                                            <ShieldCheck attr:class="h-4 w-4" />
                                                            {move || match (pending.get() == Some(id), validated) {
                                                                (true, _) => "Saving...",
                                                                (false, true) => "Revoke",
                                                                (false, false) => "Validate",
                                                            }}
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }.into_any(),
                    })}
                </div>
            </div>
        </DashboardShell>
    }
}
