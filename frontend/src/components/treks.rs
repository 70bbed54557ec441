use crate::auth::use_auth;
use crate::components::dashboard::DashboardShell;
use crate::components::icons::{Pencil, Plus, Trash2};
use crate::components::layout::{LoadError, Spinner};
use crate::components::load::{Load, load_into};
use crate::components::toast::{Notice, Toast, notice_signal};
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use trekhub::route::AppRoute;
use trekhub_shared::{Category, Role, Trek};

#[component]
pub fn AllTreksPage() -> impl IntoView {
    let auth = use_auth();
    let treks = RwSignal::new(Load::<(Vec<Trek>, Vec<Category>)>::Loading);
    let notice = notice_signal();

    let reload = move || {
        let api = auth.api();
        load_into(treks, async move {
            let treks = api.list_treks().await?;
            let categories = api.list_categories().await?;
            Ok((treks, categories))
        });
    };
    reload();

    let handle_delete = move |trek_id: i64| {
        let api = auth.api();
        spawn_local(async move {
            match api.delete_trek(trek_id).await {
                Ok(()) => {
                    notice.set(Some(Notice::success("Trek deleted")));
                    treks.update(|state| {
                        if let Load::Ready((list, _)) = state {
                            list.retain(|t| t.id != trek_id);
                        }
                    });
                }
                Err(e) => notice.set(Some(Notice::error(e.message()))),
            }
        });
    };

    view! {
        <DashboardShell role=Role::Admin>
            <Toast notice=notice />
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="flex items-center justify-between p-6 pb-2">
                        <h1 class="card-title">"All treks"</h1>
                        <Link to=AppRoute::AddTrek class="btn btn-primary btn-sm gap-2">
                            <Plus attr:class="h-4 w-4" /> "Add trek"
                        </Link>
                    </div>
                    {move || treks.with(|state| match state {
                        Load::Loading => view! { <Spinner /> }.into_any(),
                        Load::Failed(message) => view! {
                            <div class="p-6"><LoadError message=message.clone() on_retry=move |_| reload() /></div>
                        }.into_any(),
                        Load::Ready((list, _)) if list.is_empty() => view! {
                            <p class="text-center py-8 opacity-50">"No treks yet. Add one to get started."</p>
                        }.into_any(),
                        Load::Ready((list, categories)) => {
                            let category_name = |id: i64| {
                                categories.iter().find(|c| c.id == id).map(|c| c.name.clone()).unwrap_or_default()
                            };
                            view! {
                                <div class="overflow-x-auto w-full">
                                    <table class="table table-zebra w-full">
                                        <thead>
                                            <tr>
                                                <th>"Title"</th>
                                                <th>"Category"</th>
                                                <th class="hidden md:table-cell">"Days"</th>
                                                <th class="hidden md:table-cell">"Price"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list.iter().map(|trek| {
                                                let id = trek.id;
                                                view! {
                                                    <tr>
                                                        <td class="font-semibold">{trek.title.clone()}</td>
                                                        <td>{category_name(trek.category_id)}</td>
                                                        <td class="hidden md:table-cell">{trek.duration_days.map(|d| d.to_string())}</td>
                                                        <td class="hidden md:table-cell">{trek.price.map(|p| format!("{:.2}", p))}</td>
                                                        <td class="flex gap-2 justify-end">
                                                            <Link to=AppRoute::TrekPreview(id) class="btn btn-ghost btn-sm">"Preview"</Link>
                                                            <Link to=AppRoute::EditTrek(id) class="btn btn-ghost btn-sm btn-square">
                                                                <Pencil attr:class="h-4 w-4" />
                                                            </Link>
                                                            <button
                                                                class="btn btn-ghost btn-sm btn-square text-error"
                                                                on:click=move |_| handle_delete(id)
                                                            >
                                                                <Trash2 attr:class="h-4 w-4" />
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            }.into_any()
                        }
                    })}
                </div>
            </div>
        </DashboardShell>
    }
}
