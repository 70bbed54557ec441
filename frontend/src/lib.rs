//! TrekHub 浏览器端
//!
//! 业务规则全部来自 `trekhub` 核心库，这里只负责把它们接到浏览器上：
//! - `web`: fetch、LocalStorage、控制台日志与 History 路由
//! - `auth`: 通过 Context 共享的会话
//! - `components`: 各角色的页面

mod auth;
mod components {
    pub mod activity_editor;
    pub mod admin;
    pub mod categories;
    pub mod community;
    pub mod dashboard;
    pub mod guide;
    pub mod guide_profile;
    pub mod guides;
    pub mod home;
    pub mod icons;
    pub mod layout;
    pub mod load;
    pub mod login;
    pub mod register;
    pub mod reservations;
    pub mod toast;
    pub mod tourist;
    pub mod trek_details;
    pub mod trek_editor;
    pub mod treks;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::admin::AdminDashboardPage;
use crate::components::categories::{AddCategoryPage, AllCategoriesPage};
use crate::components::community::CommunityPage;
use crate::components::guide::GuideDashboardPage;
use crate::components::guide_profile::GuideProfilePage;
use crate::components::guides::AllGuidesPage;
use crate::components::home::HomePage;
use crate::components::layout::NotFoundPage;
use crate::components::login::LoginPage;
use crate::components::register::{RegisterGuidePage, RegisterTouristPage};
use crate::components::reservations::{AllReservationsPage, BookingsPage};
use crate::components::tourist::TouristProfilePage;
use crate::components::trek_details::{TrekDetailsPage, TrekPreviewPage};
use crate::components::trek_editor::TrekEditorPage;
use crate::components::treks::AllTreksPage;

use leptos::prelude::*;
use trekhub::route::AppRoute;

// 浏览器 API 封装：fetch 传输层、token 存储、日志与路由引擎
pub(crate) mod web {
    mod http;
    mod logger;
    pub mod router;
    mod storage;

    pub use http::BrowserHttpClient;
    pub use logger::init as init_logger;
    pub use storage::BrowserTokenStore;
}

use web::router::{Router, RouterOutlet};

/// 安装控制台日志
pub fn init_logging() {
    web::init_logger();
}

/// 路由到页面的映射，进入这里时守卫已经放行
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::RegisterGuide => view! { <RegisterGuidePage /> }.into_any(),
        AppRoute::RegisterTourist => view! { <RegisterTouristPage /> }.into_any(),
        AppRoute::Community => view! { <CommunityPage /> }.into_any(),
        AppRoute::TrekDetails(id) => view! { <TrekDetailsPage trek_id=id /> }.into_any(),
        AppRoute::GuideProfile(id) => view! { <GuideProfilePage guide_id=id /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::AllTreks => view! { <AllTreksPage /> }.into_any(),
        AppRoute::AddTrek => view! { <TrekEditorPage /> }.into_any(),
        AppRoute::EditTrek(id) => view! { <TrekEditorPage trek_id=id /> }.into_any(),
        AppRoute::TrekPreview(id) => view! { <TrekPreviewPage trek_id=id /> }.into_any(),
        AppRoute::AllCategories => view! { <AllCategoriesPage /> }.into_any(),
        AppRoute::AddCategory => view! { <AddCategoryPage /> }.into_any(),
        AppRoute::AllGuides => view! { <AllGuidesPage /> }.into_any(),
        AppRoute::AllReservations => view! { <AllReservationsPage /> }.into_any(),
        AppRoute::GuideDashboard => view! { <GuideDashboardPage /> }.into_any(),
        AppRoute::TouristProfile => view! { <TouristProfilePage /> }.into_any(),
        AppRoute::Bookings => view! { <BookingsPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    // 路由守卫首次执行前必须先恢复会话
    init_auth(&auth_ctx);

    let session = auth_ctx.session_signal();

    view! {
        <Router session=session>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
