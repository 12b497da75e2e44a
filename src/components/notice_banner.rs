//! Transient notice banner and the helper that raises notices.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeState};

/// Show `notice` and hide it again after `ttl`.
pub fn push_notice(notices: RwSignal<NoticeState>, notice: Notice, ttl: Duration) {
    log::debug!("notice: {:?} {}", notice.kind, notice.message);
    let mut seq = 0;
    notices.update(|state| seq = state.show(notice));
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(ttl).await;
        notices.update(|state| state.dismiss(seq));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (seq, ttl);
    }
}

/// Renders the current notice, if any. Mounted once at the app root.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        {move || {
            notices
                .get()
                .current
                .map(|notice| {
                    let class = notice.css_class();
                    view! {
                        <div class=class role="status">
                            {notice.message}
                        </div>
                    }
                })
        }}
    }
}
