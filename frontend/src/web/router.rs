//! 客户端路由
//!
//! 地址栏与 `AppRoute` 信号之间的双向同步都在这里完成：
//! 点击站内链接、浏览器前进后退、会话变化，三条路径最终都经过同一个角色守卫。

use leptos::prelude::*;
use trekhub::guard::{self, GuardDecision};
use trekhub::route::AppRoute;
use trekhub::session::Session;
use wasm_bindgen::prelude::*;

fn location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".into())
}

/// 写入地址栏；`replace` 为真时不新增历史记录
fn write_history(path: &str, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if result.is_err() {
        log::warn!("[Router] failed to update history for {}", path);
    }
}

/// 执行守卫并记录重定向
fn guarded(session: Option<&Session>, target: AppRoute) -> (AppRoute, GuardDecision) {
    let decision = guard::check(session, target);
    let resolved = decision.resolve(target);
    if decision.is_redirect() {
        log::info!("[Router] {} -> {} ({:?})", target, resolved, decision);
    }
    (resolved, decision)
}

/// 当前页面的路由状态
#[derive(Clone, Copy)]
pub struct RouterService {
    route: RwSignal<AppRoute>,
    session: Signal<Option<Session>>,
}

impl RouterService {
    /// 首次渲染前就执行守卫，直接输入受保护地址也会被重定向
    fn new(session: Signal<Option<Session>>) -> Self {
        let router = Self {
            route: RwSignal::new(AppRoute::NotFound),
            session,
        };
        router.sync_from_location();
        router
    }

    pub fn route(&self) -> AppRoute {
        self.route.get()
    }

    fn resolve(&self, target: AppRoute) -> (AppRoute, GuardDecision) {
        self.session.with_untracked(|s| guarded(s.as_ref(), target))
    }

    /// 站内导航，写入新的历史记录
    pub fn navigate_to(&self, target: AppRoute) {
        let (route, _) = self.resolve(target);
        write_history(&route.to_path(), false);
        self.route.set(route);
    }

    /// 按地址栏当前路径更新路由；被拒绝时改写地址而不留历史
    fn sync_from_location(&self) {
        let (route, decision) = self.resolve(AppRoute::from_path(&location_path()));
        if decision.is_redirect() {
            write_history(&route.to_path(), true);
        }
        self.route.set(route);
    }

    fn listen_popstate(self) {
        let on_popstate = Closure::<dyn Fn()>::new(move || self.sync_from_location());
        match web_sys::window() {
            Some(window) => {
                if window
                    .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("[Router] popstate listener not installed");
                }
            }
            None => log::warn!("[Router] no window, history navigation disabled"),
        }
        // 监听器与页面同寿命
        on_popstate.forget();
    }

    /// 会话变化后重新检查当前页面：注销离开受保护页，登录离开登录页
    fn follow_session(self) {
        Effect::new(move |_| {
            let current = self.route.get_untracked();
            let (resolved, decision) = self.session.with(|s| guarded(s.as_ref(), current));
            if decision.is_redirect() && resolved != current {
                write_history(&resolved.to_path(), false);
                self.route.set(resolved);
            }
        });
    }
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>().expect("use_router called outside <Router>")
}

// =========================================================
// 组件
// =========================================================

/// 在 App 根部提供路由服务，守卫依据注入的会话信号
#[component]
pub fn Router(session: Signal<Option<Session>>, children: Children) -> impl IntoView {
    let router = RouterService::new(session);
    router.listen_popstate();
    router.follow_session();
    provide_context(router);

    children()
}

/// 渲染当前路由对应的页面
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    move || matcher(router.route())
}

/// 站内链接：保留真实 href，点击时交给路由服务
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    view! {
        <a
            href=to.to_path()
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                router.navigate_to(to);
            }
        >
            {children()}
        </a>
    }
}
