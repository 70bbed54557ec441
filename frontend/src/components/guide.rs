use crate::auth::use_auth;
use crate::components::dashboard::{DashboardShell, StatCard};
use crate::components::layout::{LoadError, Spinner};
use crate::components::load::{Load, load_into};
use crate::components::reservations::ReservationTable;
use leptos::prelude::*;
use trekhub_shared::{Reservation, ReservationStatus, Role};

#[component]
pub fn GuideDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let reservations = RwSignal::new(Load::<Vec<Reservation>>::Loading);
    let guide_id = auth.session().map(|s| s.user.id).unwrap_or_default();
    let last_name = auth
        .session()
        .and_then(|s| s.user.last_name)
        .unwrap_or_else(|| "Guide".to_string());

    let reload = move || {
        let api = auth.api();
        load_into(reservations, async move { api.list_guide_reservations(guide_id).await });
    };
    reload();

    let count = move |pick: fn(&Reservation) -> bool| {
        Signal::derive(move || {
            reservations.with(|r| {
                r.ready()
                    .map(|list| list.iter().filter(|r| pick(r)).count().to_string())
                    .unwrap_or_else(|| "…".into())
            })
        })
    };

    view! {
        <DashboardShell role=Role::Guide>
            <div class="mb-8">
                <h1 class="text-2xl font-bold">"Guide Dashboard"</h1>
                <p class="mt-1 opacity-70">
                    {format!("Welcome back, {}! Here's your activity overview.", last_name)}
                </p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                <StatCard title="Reservations" value=count(|_| true) />
                <StatCard title="Upcoming tours" value=count(|r| r.status == ReservationStatus::Confirmed) />
                <StatCard title="Completed tours" value=count(|r| r.status == ReservationStatus::Completed) />
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Upcoming reservations"</h2>
                    {move || reservations.with(|state| match state {
                        Load::Loading => view! { <Spinner /> }.into_any(),
                        Load::Failed(message) => view! {
                            <LoadError message=message.clone() on_retry=move |_| reload() />
                        }.into_any(),
                        Load::Ready(list) => view! {
                            <ReservationTable reservations=list.clone() show_guide=false />
                        }.into_any(),
                    })}
                </div>
            </div>
        </DashboardShell>
    }
}
