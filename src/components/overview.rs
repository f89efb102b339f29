//! Overview Component
//!
//! "What Are Crypto Scams?" intro with the scammer's playbook.

use leptos::prelude::*;

use crate::catalog::total_scams;
use crate::content::PLAYBOOK_POINTS;

#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <section id="overview" class="section overview-section">
            <div class="container">
                <div class="section-header">
                    <h2>"What Are Crypto Scams?"</h2>
                    <p class="section-lead">
                        "Crypto scams are fraudulent schemes designed to steal your cryptocurrency, "
                        "private keys, or personal information. Scammers exploit the decentralized "
                        "and irreversible nature of blockchain transactions. Once your crypto is gone, "
                        "it's nearly impossible to recover."
                    </p>
                </div>

                <div class="playbook">
                    <h3>"The Scammer's Playbook"</h3>
                    <div class="info-grid">
                        {PLAYBOOK_POINTS.iter().map(|point| view! {
                            <div class="info-card">
                                <span class="info-icon">{point.icon}</span>
                                <h4>{point.title}</h4>
                                <p>{point.description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <p class="overview-teaser">
                    {format!(
                        "Below you'll find a catalog of {}+ scam types, organized by category, with proven defense strategies.",
                        total_scams() / 10 * 10
                    )}
                </p>
            </div>
        </section>
    }
}
