//! 路线活动编辑面板
//!
//! 每个操作先把编辑器克隆出信号，等待完成后再整体写回，
//! 操作期间按钮被禁用，避免两次删除交错导致序号错乱。

use crate::auth::use_auth;
use crate::components::icons::{Bus, Plus, RefreshCw, Trash2};
use crate::components::layout::Spinner;
use crate::components::toast::{Notice, Toast, notice_signal};
use crate::components::trek_details::human_duration;
use leptos::prelude::*;
use leptos::task::spawn_local;
use trekhub::activity::{ActivityDraft, ActivityEditor, ActivityField, EditorError, EditorStatus};
use trekhub::error::FieldErrors;
use trekhub_shared::ActivityKind;

#[component]
pub fn ActivityEditorPanel(trek_id: i64) -> impl IntoView {
    let auth = use_auth();
    let editor = RwSignal::new(ActivityEditor::new(trek_id));
    let draft = RwSignal::new(ActivityDraft::default());
    let field_errors = RwSignal::new(FieldErrors::<ActivityField>::new());
    let (is_busy, set_is_busy) = signal(false);
    let notice = notice_signal();

    let reload = move || {
        if is_busy.get_untracked() {
            return;
        }
        set_is_busy.set(true);
        let api = auth.api();
        let mut current = editor.get_untracked();
        // 加载期间显示占位
        editor.set(ActivityEditor::new(trek_id));
        spawn_local(async move {
            if let Err(e) = current.load(&api).await {
                log::warn!("Failed to load activities for trek {}: {}", trek_id, e);
            }
            let _ = editor.try_set(current);
            let _ = set_is_busy.try_set(false);
        });
    };
    reload();

    let on_add = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_busy.get_untracked() {
            return;
        }
        set_is_busy.set(true);
        let api = auth.api();
        let mut current = editor.get_untracked();
        let submitted = draft.get_untracked();
        spawn_local(async move {
            let result = current.add(&api, &submitted).await.map(|a| a.title.clone());
            let _ = editor.try_set(current);
            let _ = set_is_busy.try_set(false);
            match result {
                Ok(title) => {
                    let _ = draft.try_update(ActivityDraft::reset_keeping_type);
                    let _ = field_errors.try_set(FieldErrors::new());
                    let _ = notice.try_set(Some(Notice::success(format!("Added \"{}\"", title))));
                }
                Err(EditorError::Validation(errors)) => {
                    let _ = field_errors.try_set(errors);
                }
                Err(e) => {
                    let _ = notice.try_set(Some(Notice::error(e.to_string())));
                }
            }
        });
    };

    let on_remove = move |activity_id: i64| {
        if is_busy.get_untracked() {
            return;
        }
        set_is_busy.set(true);
        let api = auth.api();
        let mut current = editor.get_untracked();
        spawn_local(async move {
            let result = current.remove(&api, activity_id).await;
            let _ = editor.try_set(current);
            let _ = set_is_busy.try_set(false);
            let message = match result {
                Ok(()) => Notice::success("Activity removed"),
                Err(EditorError::Reorder { resynced: false, .. }) => Notice::error(
                    "Activity removed but the order could not be saved. Reload to see the current order.",
                ),
                Err(e) => Notice::error(e.to_string()),
            };
            let _ = notice.try_set(Some(message));
        });
    };

    // 修改字段并清除该字段的错误
    let edit = move |field: ActivityField, value: String, set: fn(&mut ActivityDraft, String)| {
        draft.update(|d| set(d, value));
        field_errors.update(|e| e.clear(&field));
    };
    let field_error = move |field: ActivityField| {
        move || field_errors.with(|e| e.get(&field).map(str::to_string))
    };
    let is_transport = move || draft.with(|d| d.kind == ActivityKind::Transportation);

    view! {
        <section class="card bg-base-100 shadow-xl">
            <Toast notice=notice />
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">"Itinerary"</h2>
                    <button
                        type="button"
                        class="btn btn-ghost btn-sm btn-square"
                        aria-label="Reload activities"
                        disabled=move || is_busy.get()
                        on:click=move |_| reload()
                    >
                        <RefreshCw attr:class="h-4 w-4" />
                    </button>
                </div>

                {move || editor.with(|ed| match ed.status() {
                    EditorStatus::Idle | EditorStatus::Loading => view! { <Spinner /> }.into_any(),
                    EditorStatus::Failed(message) => view! {
                        <div role="alert" class="alert alert-warning">
                            <span>{format!("Could not load activities: {}", message)}</span>
                        </div>
                    }.into_any(),
                    EditorStatus::Loaded if ed.list().is_empty() => view! {
                        <p class="opacity-50">"No activities yet."</p>
                    }.into_any(),
                    EditorStatus::Loaded => view! {
                        <table class="table">
                            <thead>
                                <tr><th>"#"</th><th>"Activity"</th><th>"Type"</th><th></th></tr>
                            </thead>
                            <tbody>
                                {ed.activities().iter().map(|a| {
                                    let id = a.id;
                                    let kind = match a.kind {
                                        ActivityKind::Transportation => {
                                            let duration = a.transport_duration.as_deref().map(human_duration).unwrap_or_default();
                                            view! {
                                                <span class="flex items-center gap-1">
                                                    <Bus attr:class="h-4 w-4" />
                                                    {format!("{} ({})", a.transport_type.clone().unwrap_or_default(), duration)}
                                                </span>
                                            }.into_any()
                                        }
                                        ActivityKind::Activity => "Activity".into_any(),
                                    };
                                    view! {
                                        <tr>
                                            <td class="font-mono">{a.activity_order}</td>
                                            <td>
                                                <div class="font-semibold">
                                                    {a.title.clone()}
                                                    {a.is_optional.then(|| view! { <span class="badge badge-ghost badge-sm ml-2">"optional"</span> })}
                                                </div>
                                                <div class="text-sm opacity-70">{a.description.clone()}</div>
                                            </td>
                                            <td>{kind}</td>
                                            <td>
                                                <button
                                                    type="button"
                                                    class="btn btn-ghost btn-sm btn-square text-error"
                                                    aria-label="Remove activity"
                                                    disabled=move || is_busy.get()
                                                    on:click=move |_| on_remove(id)
                                                >
                                                    <Trash2 attr:class="h-4 w-4" />
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any(),
                })}

                <div class="divider">"Add activity"</div>

                <form class="space-y-3" on:submit=on_add>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Title"</span></label>
                            <input
                                type="text"
                                class="input input-bordered"
                                prop:value=move || draft.with(|d| d.title.clone())
                                on:input=move |ev| {
                                    edit(ActivityField::Title, event_target_value(&ev), |d, v| d.title = v);
                                }
                            />
                            <span class="text-error text-xs mt-1">{field_error(ActivityField::Title)}</span>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Type"</span></label>
                            <select
                                class="select select-bordered"
                                prop:value=move || draft.with(|d| d.kind.as_str())
                                on:change=move |ev| {
                                    let kind = ActivityKind::parse(&event_target_value(&ev)).unwrap_or_default();
                                    draft.update(|d| d.kind = kind);
                                    field_errors.update(|e| {
                                        e.clear(&ActivityField::TransportType);
                                        e.clear(&ActivityField::TransportDuration);
                                    });
                                }
                            >
                                <option value={ActivityKind::Activity.as_str()}>"Activity"</option>
                                <option value={ActivityKind::Transportation.as_str()}>"Transportation"</option>
                            </select>
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">"Description"</span></label>
                        <textarea
                            class="textarea textarea-bordered"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                edit(ActivityField::Description, event_target_value(&ev), |d, v| d.description = v);
                            }
                        ></textarea>
                        <span class="text-error text-xs mt-1">{field_error(ActivityField::Description)}</span>
                    </div>

                    <Show when=is_transport>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Transport type"</span></label>
                                <input
                                    type="text"
                                    placeholder="Bus, 4x4, mule..."
                                    class="input input-bordered"
                                    prop:value=move || draft.with(|d| d.transport_type.clone())
                                    on:input=move |ev| {
                                        edit(ActivityField::TransportType, event_target_value(&ev), |d, v| d.transport_type = v);
                                    }
                                />
                                <span class="text-error text-xs mt-1">{field_error(ActivityField::TransportType)}</span>
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Duration"</span></label>
                                <input
                                    type="text"
                                    placeholder="PT2H30M"
                                    class="input input-bordered font-mono"
                                    prop:value=move || draft.with(|d| d.transport_duration.clone())
                                    on:input=move |ev| {
                                        edit(ActivityField::TransportDuration, event_target_value(&ev), |d, v| d.transport_duration = v);
                                    }
                                />
                                <span class="text-error text-xs mt-1">{field_error(ActivityField::TransportDuration)}</span>
                            </div>
                        </div>
                    </Show>

                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-primary"
                            prop:checked=move || draft.with(|d| d.is_optional)
                            on:change=move |ev| draft.update(|d| d.is_optional = event_target_checked(&ev))
                        />
                        <span class="label-text">"Optional activity"</span>
                    </label>

                    <div class="flex justify-end">
                        <button type="submit" class="btn btn-primary gap-2" disabled=move || is_busy.get()>
                            <Plus attr:class="h-4 w-4" /> "Add activity"
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
