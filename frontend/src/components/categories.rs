//! 分类管理（列表 / 新建）

use crate::auth::use_auth;
use crate::components::dashboard::DashboardShell;
use crate::components::icons::{Plus, Tag, Trash2};
use crate::components::layout::{LoadError, Spinner};
use crate::components::load::{Load, load_into};
use crate::components::toast::{Notice, Toast, notice_signal};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use trekhub::error::FieldErrors;
use trekhub::forms::{CategoryDraft, CategoryField};
use trekhub::route::AppRoute;
use trekhub_shared::{Category, Role};

#[component]
pub fn AllCategoriesPage() -> impl IntoView {
    let auth = use_auth();
    let categories = RwSignal::new(Load::<Vec<Category>>::Loading);
    let notice = notice_signal();

    let reload = move || {
        let api = auth.api();
        load_into(categories, async move { api.list_categories().await });
    };
    reload();

    let handle_delete = move |category_id: i64| {
        let api = auth.api();
        spawn_local(async move {
            match api.delete_category(category_id).await {
                Ok(()) => {
                    let _ = notice.try_set(Some(Notice::success("Category deleted")));
                    let _ = categories.try_update(|state| {
                        if let Load::Ready(list) = state {
                            list.retain(|c| c.id != category_id);
                        }
                    });
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
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold">"Categories"</h1>
                <Link to=AppRoute::AddCategory class="btn btn-primary btn-sm gap-2">
                    <Plus attr:class="h-4 w-4" /> "Add category"
                </Link>
            </div>
            {move || categories.with(|state| match state {
                Load::Loading => view! { <Spinner /> }.into_any(),
                Load::Failed(message) => view! {
                    <LoadError message=message.clone() on_retry=move |_| reload() />
                }.into_any(),
                Load::Ready(list) if list.is_empty() => view! {
                    <p class="text-center py-8 opacity-50">"No categories yet."</p>
                }.into_any(),
                Load::Ready(list) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {list.iter().map(|category| {
                            let id = category.id;
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <h2 class="card-title">
                                            <Tag attr:class="h-5 w-5 text-primary" />
                                            {category.name.clone()}
                                        </h2>
                                        <p class="text-sm opacity-70">{category.description.clone().unwrap_or_default()}</p>
                                        <div class="card-actions justify-end">
                                            <button
                                                class="btn btn-ghost btn-sm gap-2 text-error"
                                                on:click=move |_| handle_delete(id)
                                            >
                                                <Trash2 attr:class="h-4 w-4" /> "Delete"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any(),
            })}
        </DashboardShell>
    }
}

#[component]
pub fn AddCategoryPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let draft = RwSignal::new(CategoryDraft::default());
    let field_errors = RwSignal::new(FieldErrors::<CategoryField>::new());
    let (is_saving, set_is_saving) = signal(false);
    let notice = notice_signal();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match draft.with(CategoryDraft::validate) {
            Ok(payload) => payload,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };

        set_is_saving.set(true);
        let api = auth.api();
        spawn_local(async move {
            let result = api.create_category(payload).await;
            let _ = set_is_saving.try_set(false);
            match result {
                Ok(category) => {
                    log::info!("Created category {} ({})", category.name, category.id);
                    router.navigate_to(AppRoute::AllCategories);
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
            <form class="card max-w-xl mx-auto bg-base-100 shadow-xl" on:submit=on_submit>
                <div class="card-body">
                    <h1 class="card-title text-2xl">"Add category"</h1>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Name"</span></label>
                        <input
                            type="text"
                            class="input input-bordered"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.name = value);
                                field_errors.update(|e| e.clear(&CategoryField::Name));
                            }
                        />
                        <span class="text-error text-xs mt-1">
                            {move || field_errors.with(|e| e.get(&CategoryField::Name).map(str::to_string))}
                        </span>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Description (optional)"</span></label>
                        <textarea
                            class="textarea textarea-bordered"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <Link to=AppRoute::AllCategories class="btn btn-ghost">"Cancel"</Link>
                        <button type="submit" class="btn btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() { "Saving..." } else { "Create category" }}
                        </button>
                    </div>
                </div>
            </form>
        </DashboardShell>
    }
}
