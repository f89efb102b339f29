//! CryptoSafe Frontend Entry Point

mod models;
mod catalog;
mod content;
mod filter;
mod checklist;
mod accordion;
mod store;
mod config;
mod context;
mod error;
mod logging;
mod markdown;
mod share;
mod clipboard;
mod components;
mod app;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = SiteConfig::embedded();
    logging::init(config.level());
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "site.json rejected, using defaults");
    }
    tracing::info!(
        scams = catalog::total_scams(),
        categories = catalog::SCAM_CATEGORIES.len(),
        "mounting site"
    );

    mount_to_body(move || view! { <App config=config /> });
}
