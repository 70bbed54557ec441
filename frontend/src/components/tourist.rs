use crate::auth::use_auth;
use crate::components::layout::PublicLayout;
use crate::web::router::Link;
use leptos::prelude::*;
use trekhub::route::AppRoute;

#[component]
pub fn TouristProfilePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <PublicLayout>
            {move || auth.session().map(|session| {
                let user = session.user;
                view! {
                    <div class="card bg-base-100 shadow-xl max-w-xl mx-auto">
                        <div class="card-body">
                            <h1 class="card-title text-2xl">{user.display_name()}</h1>
                            <dl class="grid grid-cols-2 gap-2 text-sm">
                                <dt class="opacity-60">"First name"</dt>
                                <dd>{user.first_name.clone().unwrap_or_default()}</dd>
                                <dt class="opacity-60">"Last name"</dt>
                                <dd>{user.last_name.clone().unwrap_or_default()}</dd>
                                <dt class="opacity-60">"Email"</dt>
                                <dd>{user.email.clone().unwrap_or_default()}</dd>
                                <dt class="opacity-60">"Role"</dt>
                                <dd>{user.role.to_string()}</dd>
                            </dl>
                            <div class="card-actions justify-end mt-4">
                                <Link to=AppRoute::Bookings class="btn btn-ghost btn-sm">"My bookings"</Link>
                                <Link to=AppRoute::Home class="btn btn-primary btn-sm">"Browse treks"</Link>
                            </div>
                        </div>
                    </div>
                }
            })}
        </PublicLayout>
    }
}
