//! 页面数据加载状态

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use trekhub::error::ApiResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Load<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// 发起加载并把结果写入信号；失败时保留错误消息
pub fn load_into<T, Fut>(target: RwSignal<Load<T>>, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    target.set(Load::Loading);
    spawn_local(async move {
        let next = match fetch.await {
            Ok(value) => Load::Ready(value),
            Err(e) => Load::Failed(e.message().to_string()),
        };
        let _ = target.try_set(next);
    });
}
