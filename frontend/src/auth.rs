//! 会话上下文
//!
//! `SessionManager` 放在信号里，登录、注销、过期都只改这一处；
//! 路由服务拿到的是派生出来的只读会话信号。

use leptos::prelude::*;
use trekhub::api::TrekApi;
use trekhub::config::ClientConfig;
use trekhub::error::ApiResult;
use trekhub::session::{Session, SessionManager, now_secs};
use trekhub_shared::Role;

use crate::web::{BrowserHttpClient, BrowserTokenStore};

/// 浏览器环境下的 API 客户端
pub type Api = TrekApi<BrowserHttpClient>;

/// 认证状态
#[derive(Clone, Debug)]
pub struct AuthState {
    /// 会话管理器（唯一持有会话的地方）
    pub manager: SessionManager<BrowserTokenStore>,
    /// 是否正在从存储恢复
    pub is_loading: bool,
    pub config: ClientConfig,
}

impl AuthState {
    fn new(config: ClientConfig) -> Self {
        let store = BrowserTokenStore::new(config.token_storage_key.clone());
        Self {
            manager: SessionManager::new(store),
            is_loading: true,
            config,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::new(ClientConfig::from_env()));
        Self { state, set_state }
    }

    /// 会话信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<Option<Session>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.manager.session().cloned()))
    }

    /// 当前会话（响应式）
    pub fn session(&self) -> Option<Session> {
        self.state.with(|s| s.manager.session().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    /// 带上当前 token 的 API 客户端
    ///
    /// token 已过期时顺带注销，路由服务会随之离开受保护页面。
    pub fn api(&self) -> Api {
        let now = now_secs();
        let (base_url, token, expired) = self.state.with_untracked(|s| {
            let session = s.manager.session();
            (
                s.config.api_base_url.clone(),
                session.map(|x| x.token.clone()),
                session.is_some_and(|x| x.is_expired(now)),
            )
        });

        if expired {
            log::info!("Session expired, signing out");
            self.set_state.update(|s| s.manager.logout());
            return TrekApi::new(base_url, BrowserHttpClient);
        }
        TrekApi::new(base_url, BrowserHttpClient).with_token(token)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("use_auth called outside App")
}

/// 从 LocalStorage 恢复会话；过期的 token 直接丢弃，不发请求
pub fn init_auth(ctx: &AuthContext) {
    ctx.set_state.update(|state| {
        state.manager.init(now_secs());
        state.is_loading = false;
    });
}

/// 登录并保存会话，返回用户角色
pub async fn login(ctx: &AuthContext, email: String, password: String) -> ApiResult<Role> {
    let api = ctx.api();
    let mut manager = ctx.state.with_untracked(|s| s.manager.clone());

    let role = manager
        .login(&api, &email, &password, now_secs())
        .await?
        .role();

    ctx.set_state.update(|state| state.manager = manager);
    Ok(role)
}

/// 注销；离开受保护页面由路由服务的会话监听完成
pub fn logout(ctx: &AuthContext) {
    ctx.set_state.update(|state| state.manager.logout());
}
