//! Scam Card Component

use leptos::prelude::*;

use crate::catalog::find_category;
use crate::models::ScamRecord;

/// Summary card; clicking opens the detail modal
#[component]
pub fn ScamCard(
    scam: &'static ScamRecord,
    #[prop(into)] on_open: Callback<u32>,
) -> impl IntoView {
    let id = scam.id;
    let icon = find_category(scam.category).map(|cat| cat.icon).unwrap_or("•");

    view! {
        <button type="button" class="scam-card" on:click=move |_| on_open.run(id)>
            <div class="scam-card-header">
                <span class="scam-card-icon">{icon}</span>
                <span class=scam.risk_level.badge_class()>{scam.risk_level.label()}</span>
            </div>
            <h3 class="scam-card-title">{scam.title}</h3>
            <p class="scam-card-desc">{scam.short_desc}</p>
            <span class="scam-card-more">"Learn defense strategy →"</span>
        </button>
    }
}
