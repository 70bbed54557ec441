use crate::auth::use_auth;
use crate::components::dashboard::DashboardShell;
use crate::components::icons::RefreshCw;
use crate::components::layout::{LoadError, PublicLayout, Spinner};
use crate::components::load::{Load, load_into};
use leptos::prelude::*;
use trekhub_shared::{Reservation, ReservationStatus, Role};

fn status_badge(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "badge badge-warning",
        ReservationStatus::Confirmed => "badge badge-success",
        ReservationStatus::Cancelled => "badge badge-error",
        ReservationStatus::Completed => "badge badge-neutral",
    }
}

#[component]
pub fn ReservationTable(reservations: Vec<Reservation>, show_guide: bool) -> impl IntoView {
    if reservations.is_empty() {
        return view! { <p class="text-center py-8 opacity-50">"No reservations yet."</p> }.into_any();
    }

    view! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Trek"</th>
                        <th>"Tourist"</th>
                        <Show when=move || show_guide><th>"Guide"</th></Show>
                        <th>"Date"</th>
                        <th>"Guests"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {reservations.into_iter().map(|r| {
                        let guide = r.guide_id.map(|id| format!("#{}", id)).unwrap_or_default();
                        view! {
                            <tr>
                                <td>{r.trek_title.unwrap_or_default()}</td>
                                <td>{r.tourist_name.unwrap_or_default()}</td>
                                <Show when=move || show_guide><td>{guide.clone()}</td></Show>
                                <td>{r.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}</td>
                                <td>{r.guests.map(|g| g.to_string()).unwrap_or_default()}</td>
                                <td><span class=status_badge(r.status)>{r.status.label()}</span></td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

#[component]
pub fn AllReservationsPage() -> impl IntoView {
    let auth = use_auth();
    let reservations = RwSignal::new(Load::<Vec<Reservation>>::Loading);

    let reload = move || {
        let api = auth.api();
        load_into(reservations, async move { api.list_reservations().await });
    };
    reload();

    view! {
        <DashboardShell role=Role::Admin>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h1 class="card-title">"All reservations"</h1>
                        <button
                            class="btn btn-ghost btn-circle"
                            disabled=move || reservations.with(Load::is_loading)
                            on:click=move |_| reload()
                        >
                            <RefreshCw attr:class="h-5 w-5" />
                        </button>
                    </div>
                    {move || reservations.with(|state| match state {
                        Load::Loading => view! { <Spinner /> }.into_any(),
                        Load::Failed(message) => view! {
                            <LoadError message=message.clone() on_retry=move |_| reload() />
                        }.into_any(),
                        Load::Ready(list) => view! {
                            <ReservationTable reservations=list.clone() show_guide=true />
                        }.into_any(),
                    })}
                </div>
            </div>
        </DashboardShell>
    }
}

/// 游客的预订列表
///
/// 同一个预订接口按请求携带的 token 返回当前游客可见的记录。
#[component]
pub fn BookingsPage() -> impl IntoView {
    let auth = use_auth();
    let bookings = RwSignal::new(Load::<Vec<Reservation>>::Loading);

    let reload = move || {
        let api = auth.api();
        load_into(bookings, async move { api.list_reservations().await });
    };
    reload();

    view! {
        <PublicLayout>
            <div class="card bg-base-100 shadow-xl max-w-4xl mx-auto">
                <div class="card-body">
                    <h1 class="card-title text-2xl">"My bookings"</h1>
                    {move || bookings.with(|state| match state {
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
        </PublicLayout>
    }
}
