//! 新建 / 编辑徒步路线
//!
//! 路线保存后才会出现活动编辑器，新建成功后跳转到编辑页。

use crate::auth::use_auth;
use crate::components::activity_editor::ActivityEditorPanel;
use crate::components::dashboard::DashboardShell;
use crate::components::icons::ChevronLeft;
use crate::components::layout::{LoadError, Spinner};
use crate::components::load::{Load, load_into};
use crate::components::toast::{Notice, Toast, notice_signal};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use trekhub::error::FieldErrors;
use trekhub::forms::{TrekDraft, TrekField};
use trekhub::route::AppRoute;
use trekhub_shared::{Category, Role};

const DIFFICULTIES: [&str; 3] = ["Easy", "Moderate", "Hard"];

/// 路线表单状态
#[derive(Clone, Copy)]
struct TrekForm {
    draft: RwSignal<TrekDraft>,
    errors: RwSignal<FieldErrors<TrekField>>,
}

impl TrekForm {
    fn new() -> Self {
        Self {
            draft: RwSignal::new(TrekDraft::default()),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    /// 修改字段并清除该字段的错误
    fn edit(&self, field: TrekField, apply: impl FnOnce(&mut TrekDraft)) {
        self.draft.update(apply);
        self.errors.update(|e| e.clear(&field));
    }
}

fn field_error(
    errors: RwSignal<FieldErrors<TrekField>>,
    field: TrekField,
) -> impl Fn() -> Option<String> + Send + Sync + 'static {
    move || errors.with(|e| e.get(&field).map(str::to_string))
}

#[component]
pub fn TrekEditorPage(#[prop(optional)] trek_id: Option<i64>) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let form = TrekForm::new();
    let categories = RwSignal::new(Load::<Vec<Category>>::Loading);
    // 编辑模式下等待原路线加载
    let (trek_loaded, set_trek_loaded) = signal(trek_id.is_none());
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);
    let notice = notice_signal();

    let load_categories = move || {
        let api = auth.api();
        load_into(categories, async move { api.list_categories().await });
    };
    load_categories();

    let load_trek = move || {
        let Some(id) = trek_id else { return };
        let api = auth.api();
        set_load_error.set(None);
        spawn_local(async move {
            match api.get_trek(id).await {
                Ok(trek) => {
                    let _ = form.draft.try_set(TrekDraft::from(&trek));
                    let _ = set_trek_loaded.try_set(true);
                }
                Err(e) => {
                    let _ = set_load_error.try_set(Some(e.message().to_string()));
                }
            }
        });
    };
    load_trek();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.draft.with(TrekDraft::validate) {
            Ok(payload) => payload,
            Err(errors) => {
                form.errors.set(errors);
                return;
            }
        };

        set_is_saving.set(true);
        let api = auth.api();
        spawn_local(async move {
            let result = match trek_id {
                Some(id) => api.update_trek(id, payload).await,
                None => api.create_trek(payload).await,
            };
            let _ = set_is_saving.try_set(false);
            match result {
                Ok(trek) if trek_id.is_none() => {
                    log::info!("Created trek {}", trek.id);
                    router.navigate_to(AppRoute::EditTrek(trek.id));
                }
                Ok(_) => {
                    let _ = notice.try_set(Some(Notice::success("Trek updated")));
                }
                Err(e) => {
                    let _ = notice.try_set(Some(Notice::error(e.message())));
                }
            }
        });
    };

    let text_input = move |field: TrekField,
                           label: &'static str,
                           kind: &'static str,
                           get: fn(&TrekDraft) -> String,
                           set: fn(&mut TrekDraft, String)| {
        view! {
            <div class="form-control">
                <label class="label"><span class="label-text">{label}</span></label>
                <input
                    type=kind
                    class="input input-bordered"
                    prop:value=move || form.draft.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.edit(field, |d| set(d, value));
                    }
                />
                <span class="text-error text-xs mt-1">{field_error(form.errors, field)}</span>
            </div>
        }
    };

    let title = if trek_id.is_some() { "Edit trek" } else { "Add trek" };

    view! {
        <DashboardShell role=Role::Admin>
            <Toast notice=notice />
            <div class="max-w-4xl mx-auto space-y-6">
                <Link to=AppRoute::AllTreks class="btn btn-ghost btn-sm gap-2">
                    <ChevronLeft attr:class="h-4 w-4" /> "All treks"
                </Link>

                {move || match load_error.get() {
                    Some(message) => view! {
                        <LoadError message=message on_retry=move |_| load_trek() />
                    }.into_any(),
                    None if !trek_loaded.get() => view! { <Spinner /> }.into_any(),
                    None => view! {
                        <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                            <div class="card-body">
                                <h1 class="card-title text-2xl">{title}</h1>

                                {text_input(TrekField::Title, "Title", "text",
                                    |d| d.title.clone(), |d, v| d.title = v)}

                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Category"</span></label>
                                    <select
                                        class="select select-bordered"
                                        prop:value=move || form.draft.with(|d| d.category_id.to_string())
                                        on:change=move |ev| {
                                            let id = event_target_value(&ev).parse().unwrap_or(0);
                                            form.edit(TrekField::Category, |d| d.category_id = id);
                                        }
                                    >
                                        <option value="0">"Select a category"</option>
                                        {move || categories.with(|state| match state {
                                            Load::Ready(list) => list.iter().map(|c| view! {
                                                <option value={c.id.to_string()}>{c.name.clone()}</option>
                                            }).collect_view().into_any(),
                                            _ => ().into_any(),
                                        })}
                                    </select>
                                    <span class="text-error text-xs mt-1">{field_error(form.errors, TrekField::Category)}</span>
                                    {move || categories.with(|state| state.error().map(|message| view! {
                                        <div class="flex items-center gap-2 text-sm text-warning mt-1">
                                            <span>{format!("Categories unavailable: {}", message)}</span>
                                            <button type="button" class="btn btn-xs" on:click=move |_| load_categories()>"Retry"</button>
                                        </div>
                                    }))}
                                </div>

                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Description"</span></label>
                                    <textarea
                                        class="textarea textarea-bordered h-32"
                                        prop:value=move || form.draft.with(|d| d.description.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.edit(TrekField::Description, |d| d.description = value);
                                        }
                                    ></textarea>
                                    <span class="text-error text-xs mt-1">{field_error(form.errors, TrekField::Description)}</span>
                                </div>

                                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                    {text_input(TrekField::DurationDays, "Duration (days)", "number",
                                        |d| d.duration_days.clone(), |d, v| d.duration_days = v)}
                                    {text_input(TrekField::Price, "Price", "number",
                                        |d| d.price.clone(), |d, v| d.price = v)}
                                    <div class="form-control">
                                        <label class="label"><span class="label-text">"Difficulty"</span></label>
                                        <select
                                            class="select select-bordered"
                                            prop:value=move || form.draft.with(|d| d.difficulty.clone())
                                            on:change=move |ev| form.draft.update(|d| d.difficulty = event_target_value(&ev))
                                        >
                                            <option value="">"Not specified"</option>
                                            {DIFFICULTIES.iter().map(|level| view! {
                                                <option value={*level}>{*level}</option>
                                            }).collect_view()}
                                        </select>
                                    </div>
                                </div>

                                <div class="card-actions justify-end mt-4">
                                    <button type="submit" class="btn btn-primary" disabled=move || is_saving.get()>
                                        {move || match (is_saving.get(), trek_id) {
                                            (true, _) => "Saving...",
                                            (false, Some(_)) => "Save changes",
                                            (false, None) => "Create trek",
                                        }}
                                    </button>
                                </div>
                            </div>
                        </form>
                    }.into_any(),
                }}

                {trek_id.map(|id| view! { <ActivityEditorPanel trek_id=id /> })}
            </div>
        </DashboardShell>
    }
}
