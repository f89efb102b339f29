//! Toast Component
//!
//! Renders the current notice and clears it after `notice_ms`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_site;

#[component]
pub fn Toast() -> impl IntoView {
    let site = use_site();
    let notice_ms = site.with_config(|c| c.notice_ms);

    Effect::new(move |_| {
        if let Some(id) = site.notice.with(|n| n.as_ref().map(|n| n.id)) {
            spawn_local(async move {
                TimeoutFuture::new(notice_ms).await;
                site.dismiss(id);
            });
        }
    });

    move || {
        site.notice.get().map(|notice| {
            let id = notice.id;
            view! {
                <div class=notice.severity.class() role="status" aria-live="polite">
                    <span>{notice.message}</span>
                    <button
                        type="button"
                        class="toast-close"
                        aria-label="Dismiss"
                        on:click=move |_| site.dismiss(id)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
