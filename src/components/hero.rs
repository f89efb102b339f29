//! Hero Component

use leptos::prelude::*;

use crate::content::HERO_STATS;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-inner">
                <div class="hero-badge">
                    <span class="pulse-dot"></span>
                    <span>"Protecting crypto users worldwide"</span>
                </div>

                <h1 class="hero-title">
                    "Don't Become a " <span class="gradient-text-warning">"Crypto Victim"</span>
                </h1>
                <p class="hero-subtitle">
                    "Learn to identify and protect yourself from the most common cryptocurrency scams. "
                    "Knowledge is your best defense in the crypto world."
                </p>

                <div class="hero-cta">
                    <a class="btn btn-primary btn-xl" href="#scams">"🛡️ Explore Scam Types"</a>
                    <a class="btn btn-glass btn-xl" href="#tips">"Protection Tips"</a>
                </div>

                <div class="hero-stats">
                    {HERO_STATS.iter().map(|stat| view! {
                        <div class="hero-stat">
                            <p class=stat.class>{stat.value}</p>
                            <p class="stat-caption">{stat.caption}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
