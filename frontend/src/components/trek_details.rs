use crate::auth::{AuthContext, use_auth};
use crate::components::dashboard::DashboardShell;
use crate::components::icons::{Bus, ChevronLeft, Mountain, Pencil};
use crate::components::layout::{LoadError, PublicLayout, Spinner};
use crate::components::load::{Load, load_into};
use crate::web::router::Link;
use leptos::prelude::*;
use trekhub::activity::ActivityList;
use trekhub::route::AppRoute;
use trekhub_shared::{Activity, ActivityKind, IsoDuration, Role, Trek};

/// `PT2H30M` -> `2h 30min`；无法解析时原样返回
pub fn human_duration(raw: &str) -> String {
    let Ok(duration) = IsoDuration::parse(raw) else {
        return raw.to_string();
    };
    let secs = duration.as_secs();
    let (days, hours, minutes) = (secs / 86_400, secs % 86_400 / 3_600, secs % 3_600 / 60);
    let parts: Vec<String> = [(days, "d"), (hours, "h"), (minutes, "min")]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{}{}", n, unit))
        .collect();
    if parts.is_empty() {
        "0min".to_string()
    } else {
        parts.join(" ")
    }
}

/// 拉取路线与活动
fn load_trek(auth: AuthContext, target: RwSignal<Load<(Trek, ActivityList)>>, trek_id: i64) {
    let api = auth.api();
    load_into(target, async move {
        let trek = api.get_trek(trek_id).await?;
        let activities = api.list_activities(trek_id).await?;
        Ok((trek, ActivityList::new(activities)))
    });
}

/// 路线详情与行程，公开页与管理员预览共用
fn trek_view(
    trek: RwSignal<Load<(Trek, ActivityList)>>,
    reload: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    move || trek.with(|state| match state {
        Load::Loading => view! { <Spinner /> }.into_any(),
        Load::Failed(message) => view! {
            <LoadError message=message.clone() on_retry=move |_| reload() />
        }.into_any(),
        Load::Ready((trek, activities)) => view! {
            <article class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h1 class="card-title text-3xl">
                        <Mountain attr:class="h-7 w-7 text-primary" />
                        {trek.title.clone()}
                    </h1>
                    <div class="flex gap-2 flex-wrap">
                        {trek.duration_days.map(|d| view! { <span class="badge badge-outline">{format!("{} days", d)}</span> })}
                        {trek.price.map(|p| view! { <span class="badge badge-primary">{format!("{:.2} MAD", p)}</span> })}
                        {trek.difficulty.clone().map(|d| view! { <span class="badge badge-accent">{d}</span> })}
                    </div>
                    <p class="whitespace-pre-line">{trek.description.clone()}</p>

                    <h2 class="text-xl font-semibold mt-6">"Itinerary"</h2>
                    <Itinerary activities=activities.items().to_vec() />
                </div>
            </article>
        }.into_any(),
    })
}

#[component]
pub fn TrekDetailsPage(trek_id: i64) -> impl IntoView {
    let auth = use_auth();
    let trek = RwSignal::new(Load::<(Trek, ActivityList)>::Loading);
    let reload = move || load_trek(auth, trek, trek_id);
    reload();

    view! {
        <PublicLayout>{trek_view(trek, reload)}</PublicLayout>
    }
}

/// 管理员预览：与公开页相同的展示，附带返回编辑的入口
#[component]
pub fn TrekPreviewPage(trek_id: i64) -> impl IntoView {
    let auth = use_auth();
    let trek = RwSignal::new(Load::<(Trek, ActivityList)>::Loading);
    let reload = move || load_trek(auth, trek, trek_id);
    reload();

    view! {
        <DashboardShell role=Role::Admin>
            <div class="max-w-4xl mx-auto space-y-4">
                <div class="flex justify-between">
                    <Link to=AppRoute::AllTreks class="btn btn-ghost btn-sm gap-2">
                        <ChevronLeft attr:class="h-4 w-4" /> "All treks"
                    </Link>
                    <Link to=AppRoute::EditTrek(trek_id) class="btn btn-primary btn-sm gap-2">
                        <Pencil attr:class="h-4 w-4" /> "Edit"
                    </Link>
                </div>
                {trek_view(trek, reload)}
            </div>
        </DashboardShell>
    }
}

#[component]
pub fn Itinerary(activities: Vec<Activity>) -> impl IntoView {
    if activities.is_empty() {
        return view! { <p class="text-base-content/50">"The itinerary has not been published yet."</p> }
            .into_any();
    }

    view! {
        <ul class="timeline timeline-vertical timeline-compact">
            {activities.into_iter().map(|a| {
                let transport = (a.kind == ActivityKind::Transportation).then(|| {
                    let duration = a.transport_duration.as_deref().map(human_duration).unwrap_or_default();
                    format!("{} · {}", a.transport_type.clone().unwrap_or_default(), duration)
                });
                view! {
                    <li>
                        <div class="timeline-start font-mono text-sm">{a.activity_order}</div>
                        <div class="timeline-middle">
                            {if transport.is_some() {
                                view! { <Bus attr:class="h-4 w-4" /> }.into_any()
                            } else {
                                view! { <span class="badge badge-xs badge-primary"></span> }.into_any()
                            }}
                        </div>
                        <div class="timeline-end timeline-box mb-4">
                            <div class="font-semibold">
                                {a.title}
                                {a.is_optional.then(|| view! { <span class="badge badge-ghost badge-sm ml-2">"optional"</span> })}
                            </div>
                            <p class="text-sm opacity-70">{a.description}</p>
                            {transport.map(|t| view! { <p class="text-xs mt-1">{t}</p> })}
                        </div>
                        <hr />
                    </li>
                }
            }).collect_view()}
        </ul>
    }
    .into_any()
}
