use crate::auth::use_auth;
use crate::components::icons::Mountain;
use crate::components::layout::{LoadError, PublicLayout, Spinner};
use crate::components::load::{Load, load_into};
use crate::web::router::Link;
use leptos::prelude::*;
use trekhub::route::AppRoute;
use trekhub_shared::Trek;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let treks = RwSignal::new(Load::<Vec<Trek>>::Loading);

    let reload = move || {
        let api = auth.api();
        load_into(treks, async move { api.list_treks().await });
    };
    reload();

    view! {
        <PublicLayout>
            <section class="hero bg-base-100 rounded-box shadow mb-8">
                <div class="hero-content text-center py-12">
                    <div class="max-w-xl">
                        <h1 class="text-4xl font-bold">"Explore the mountains with local guides"</h1>
                        <p class="py-4 text-base-content/70">
                            "Hand-picked treks, day-by-day activities and certified guides."
                        </p>
                        <Link to=AppRoute::Community class="btn btn-primary">"Meet our guides"</Link>
                    </div>
                </div>
            </section>

            {move || treks.with(|state| match state {
                Load::Loading => view! { <Spinner /> }.into_any(),
                Load::Failed(message) => view! {
                    <LoadError message=message.clone() on_retry=move |_| reload() />
                }.into_any(),
                Load::Ready(list) if list.is_empty() => view! {
                    <p class="text-center text-base-content/50 py-8">"No treks published yet."</p>
                }.into_any(),
                Load::Ready(list) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {list.iter().cloned().map(|trek| view! { <TrekCard trek=trek /> }).collect_view()}
                    </div>
                }.into_any(),
            })}
        </PublicLayout>
    }
}

#[component]
fn TrekCard(trek: Trek) -> impl IntoView {
    let meta = [
        trek.duration_days.map(|d| format!("{} days", d)),
        trek.price.map(|p| format!("{:.2} MAD", p)),
        trek.difficulty.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">
                    <Mountain attr:class="h-5 w-5 text-primary" />
                    {trek.title.clone()}
                </h2>
                <p class="text-sm text-base-content/70 line-clamp-3">{trek.description.clone()}</p>
                <p class="text-xs opacity-60">{meta}</p>
                <div class="card-actions justify-end">
                    <Link to=AppRoute::TrekDetails(trek.id) class="btn btn-primary btn-sm">
                        "View details"
                    </Link>
                </div>
            </div>
        </div>
    }
}
