use crate::auth::use_auth;
use crate::components::dashboard::{DashboardShell, StatCard};
use crate::components::layout::LoadError;
use crate::components::load::{Load, load_into};
use leptos::prelude::*;
use trekhub_shared::{ReservationStatus, Role};

/// 面板统计
#[derive(Debug, Clone, Default, PartialEq)]
struct AdminStats {
    treks: usize,
    categories: usize,
    guides: usize,
    pending_guides: usize,
    reservations: usize,
    pending_reservations: usize,
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let stats = RwSignal::new(Load::<AdminStats>::Loading);

    let reload = move || {
        let api = auth.api();
        load_into(stats, async move {
            let treks = api.list_treks().await?;
            let categories = api.list_categories().await?;
            let guides = api.list_guides().await?;
            let reservations = api.list_reservations().await?;
            Ok(AdminStats {
                treks: treks.len(),
                categories: categories.len(),
                guides: guides.len(),
                pending_guides: guides.iter().filter(|g| !g.validated).count(),
                reservations: reservations.len(),
                pending_reservations: reservations
                    .iter()
                    .filter(|r| r.status == ReservationStatus::Pending)
                    .count(),
            })
        });
    };
    reload();

    let stat = move |pick: fn(&AdminStats) -> usize| {
        Signal::derive(move || {
            stats.with(|s| s.ready().map(|s| pick(s).to_string()).unwrap_or_else(|| "…".into()))
        })
    };

    view! {
        <DashboardShell role=Role::Admin>
            <div class="mb-8">
                <h1 class="text-2xl font-bold">"Admin Dashboard"</h1>
                <p class="mt-1 opacity-70">"Overview of treks, guides and bookings."</p>
            </div>
            {move || stats.with(|s| s.error().map(|message| view! {
                <LoadError message=message.to_string() on_retry=move |_| reload() />
            }))}
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <StatCard title="Treks" value=stat(|s| s.treks) />
                <StatCard title="Categories" value=stat(|s| s.categories) />
                <StatCard title="Guides" value=stat(|s| s.guides) />
                <StatCard title="Awaiting validation" value=stat(|s| s.pending_guides) description="Guide applications" />
                <StatCard title="Reservations" value=stat(|s| s.reservations) />
                <StatCard title="Pending bookings" value=stat(|s| s.pending_reservations) />
            </div>
        </DashboardShell>
    }
}
