//! 通知提示框，3 秒后自动消失

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// 页面级通知信号
pub fn notice_signal() -> RwSignal<Option<Notice>> {
    RwSignal::new(None)
}

#[component]
pub fn Toast(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    // 每条新通知都重新计时；旧计时器触发时若通知已更换则不清除
    Effect::new(move |_| {
        if let Some(current) = notice.get() {
            Timeout::new(DISMISS_AFTER_MS, move || {
                if notice.try_get_untracked().flatten().as_ref() == Some(&current) {
                    let _ = notice.try_set(None);
                }
            })
            .forget();
        }
    });

    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    if notice.with(|n| n.as_ref().is_some_and(|n| n.is_error)) {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notice.with(|n| n.as_ref().map(|n| n.message.clone()))}</span>
                </div>
            </div>
        </Show>
    }
}
