//! LocalStorage 封装模块
//!
//! token 以原始字符串保存（不经过 JSON 编码），因此直接使用 `LocalStorage::raw()`。

use gloo_storage::{LocalStorage, Storage};
use trekhub::session::TokenStore;

/// 基于浏览器 LocalStorage 的 token 存储
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        if LocalStorage::raw().set_item(&self.key, token).is_err() {
            log::warn!("Failed to persist session token");
        }
    }

    fn clear(&self) {
        let _ = LocalStorage::raw().remove_item(&self.key);
    }
}
