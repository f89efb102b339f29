//! Protection Tips Component

use leptos::prelude::*;

use crate::content::PROTECTION_TIPS;

#[component]
pub fn Tips() -> impl IntoView {
    view! {
        <section id="tips" class="section tips-section">
            <div class="container">
                <div class="section-header">
                    <span class="section-badge badge-success">"Stay Protected"</span>
                    <h2><span class="gradient-text">"Protection Tips"</span></h2>
                    <p class="section-lead">
                        "Follow these essential security practices to keep your crypto assets safe."
                    </p>
                </div>

                <div class="tips-grid">
                    {PROTECTION_TIPS.iter().map(|tip| view! {
                        <div class="tip">
                            <span class="tip-icon">{tip.icon}</span>
                            <div>
                                <h3>{tip.title}</h3>
                                <p>{tip.description}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>

                <div class="reminder">
                    <p class="reminder-title">"Remember"</p>
                    <p>"If it seems too good to be true, it probably is."</p>
                </div>
            </div>
        </section>
    }
}
