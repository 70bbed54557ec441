//! 注册页（向导 / 游客共用一个表单）

use crate::auth::use_auth;
use crate::components::layout::PublicLayout;
use crate::components::toast::{Notice, Toast, notice_signal};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use trekhub::error::FieldErrors;
use trekhub::forms::{RegistrationDraft, RegistrationField};
use trekhub::route::AppRoute;
use trekhub_shared::Role;

#[component]
pub fn RegisterGuidePage() -> impl IntoView {
    view! { <RegisterForm role=Role::Guide /> }
}

#[component]
pub fn RegisterTouristPage() -> impl IntoView {
    view! { <RegisterForm role=Role::Tourist /> }
}

#[component]
fn RegisterForm(role: Role) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let draft = RwSignal::new(RegistrationDraft::default());
    let field_errors = RwSignal::new(FieldErrors::<RegistrationField>::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let notice = notice_signal();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match draft.with(RegistrationDraft::validate) {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            let api = auth.api();
            let result = match role {
                Role::Guide => api.register_guide(request).await,
                _ => api.register_tourist(request).await,
            };
            set_is_submitting.set(false);
            match result {
                Ok(()) => {
                    draft.set(RegistrationDraft::default());
                    router.navigate_to(AppRoute::Login);
                }
                Err(e) => notice.set(Some(Notice::error(e.message()))),
            }
        });
    };

    // 文本输入框：编辑时清除该字段的错误
    let input = move |field: RegistrationField,
                      label: &'static str,
                      kind: &'static str,
                      get: fn(&RegistrationDraft) -> String,
                      set: fn(&mut RegistrationDraft, String)| {
        view! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{label}</span>
                </label>
                <input
                    type=kind
                    class="input input-bordered"
                    prop:value=move || draft.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| set(d, value));
                        field_errors.update(|e| e.clear(&field));
                    }
                />
                <span class="text-error text-xs mt-1">
                    {move || field_errors.with(|e| e.get(&field).map(str::to_string))}
                </span>
            </div>
        }
    };

    let (title, subtitle) = match role {
        Role::Guide => ("Become a guide", "Your account will be reviewed by an administrator."),
        _ => ("Join TrekHub", "Book treks with certified local guides."),
    };

    view! {
        <PublicLayout>
            <Toast notice=notice />
            <div class="card max-w-xl mx-auto bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_submit>
                    <h1 class="card-title text-2xl">{title}</h1>
                    <p class="text-base-content/70">{subtitle}</p>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {input(RegistrationField::FirstName, "First name", "text",
                            |d| d.first_name.clone(), |d, v| d.first_name = v)}
                        {input(RegistrationField::LastName, "Last name", "text",
                            |d| d.last_name.clone(), |d, v| d.last_name = v)}
                    </div>
                    {input(RegistrationField::Email, "Email", "email",
                        |d| d.email.clone(), |d, v| d.email = v)}
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Phone (optional)"</span>
                        </label>
                        <input
                            type="tel"
                            class="input input-bordered"
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                        />
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {input(RegistrationField::Password, "Password", "password",
                            |d| d.password.clone(), |d, v| d.password = v)}
                        {input(RegistrationField::ConfirmPassword, "Confirm password", "password",
                            |d| d.confirm_password.clone(), |d, v| d.confirm_password = v)}
                    </div>
                    <button class="btn btn-primary mt-4" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Creating account..." } else { "Create account" }}
                    </button>
                    <p class="text-sm text-center">
                        "Already registered? "
                        <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
                    </p>
                </form>
            </div>
        </PublicLayout>
    }
}
