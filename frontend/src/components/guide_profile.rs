use crate::auth::use_auth;
use crate::components::layout::{LoadError, PublicLayout, Spinner};
use crate::components::load::{Load, load_into};
use leptos::prelude::*;
use trekhub_shared::Guide;

#[component]
pub fn GuideProfilePage(guide_id: i64) -> impl IntoView {
    let auth = use_auth();
    let guide = RwSignal::new(Load::<Guide>::Loading);

    let reload = move || {
        let api = auth.api();
        load_into(guide, async move { api.get_guide(guide_id).await });
    };
    reload();

    view! {
        <PublicLayout>
            {move || guide.with(|state| match state {
                Load::Loading => view! { <Spinner /> }.into_any(),
                Load::Failed(message) => view! {
                    <LoadError message=message.clone() on_retry=move |_| reload() />
                }.into_any(),
                Load::Ready(guide) => {
                    let guide = guide.clone();
                    view! {
                        <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
                            <div class="card-body">
                                <h1 class="card-title text-3xl">
                                    {guide.full_name()}
                                    {guide.validated.then(|| view! { <span class="badge badge-success">"Verified"</span> })}
                                </h1>
                                <p class="whitespace-pre-line">{guide.bio.clone().unwrap_or_default()}</p>
                                <div class="divider"></div>
                                <dl class="grid grid-cols-2 gap-2 text-sm">
                                    <dt class="opacity-60">"Email"</dt>
                                    <dd>{guide.email.clone().unwrap_or_default()}</dd>
                                    <dt class="opacity-60">"Phone"</dt>
                                    <dd>{guide.phone.clone().unwrap_or_default()}</dd>
                                    <dt class="opacity-60">"Languages"</dt>
                                    <dd>{guide.languages.join(", ")}</dd>
                                </dl>
                            </div>
                        </div>
                    }.into_any()
                }
            })}
        </PublicLayout>
    }
}
