//! Footer Component
//!
//! Share links, copy-link button and copyright line.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard;
use crate::context::{use_site, Severity};
use crate::share::{share_url, ShareTarget};

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let config = site.config();
    let year = js_sys::Date::new_0().get_full_year();

    let copy_link = move |_| {
        let url = site.with_config(|c| c.share_url.clone());
        spawn_local(async move {
            match clipboard::write_text(&url).await {
                Ok(()) => site.notify("Link copied to clipboard", Severity::Success),
                Err(e) => {
                    tracing::warn!(error = %e, "copy link failed");
                    site.notify("Couldn't copy the link. Copy it from the address bar instead.", Severity::Error);
                }
            }
        });
    };

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-row">
                    <div class="brand">
                        <span class="brand-icon">"🛡️"</span>
                        <span class="brand-name">{config.site_name.clone()}</span>
                    </div>
                    <p class="footer-mission">"Educating and protecting the crypto community from scams."</p>
                </div>

                <div class="share-row">
                    <span class="share-title">"Share this guide:"</span>
                    {ShareTarget::ALL.into_iter().map(|target| view! {
                        <a
                            class="share-link"
                            href=share_url(target, &config.share_url, &config.share_text)
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {target.label()}
                        </a>
                    }).collect_view()}
                    <button type="button" class="share-link copy-link" on:click=copy_link>
                        "Copy link"
                    </button>
                </div>

                <p class="footer-legal">
                    {format!(
                        "© {} {}. This is an educational resource. Always do your own research.",
                        year, config.site_name
                    )}
                </p>
            </div>
        </footer>
    }
}
