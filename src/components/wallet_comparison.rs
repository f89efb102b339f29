//! Wallet Comparison Component
//!
//! Hot vs. cold wallet table driven by a two-state selector.

use leptos::prelude::*;

use crate::content::WALLET_FEATURES;
use crate::models::WalletKind;

#[component]
pub fn WalletComparison() -> impl IntoView {
    let (active, set_active) = signal(WalletKind::default());

    view! {
        <section id="hardware" class="section hardware-section">
            <div class="container">
                <div class="section-header">
                    <span class="section-badge badge-success">"The Ultimate Defense"</span>
                    <h2>"The " <span class="gradient-text">"Hardware Wallet"</span></h2>
                    <p class="section-lead">
                        "Software wallets live on the internet. Scammers live there too. "
                        <strong>"Hardware wallets keep your keys offline"</strong>
                        ", where hackers can't reach them."
                    </p>
                </div>

                <div class="wallet-toggle" role="tablist">
                    {[WalletKind::Hot, WalletKind::Cold].into_iter().map(|kind| {
                        let is_active = move || active.get() == kind;
                        let tone = if kind == WalletKind::Hot { "alert" } else { "success" };
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || if is_active() {
                                    format!("wallet-toggle-btn active tone-{}", tone)
                                } else {
                                    "wallet-toggle-btn".to_string()
                                }
                                aria-selected=move || is_active().to_string()
                                on:click=move |_| set_active.set(kind)
                            >
                                {if kind == WalletKind::Hot { "📶 " } else { "💾 " }}
                                {kind.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="comparison">
                    <div class=move || match active.get() {
                        WalletKind::Hot => "comparison-banner tone-alert",
                        WalletKind::Cold => "comparison-banner tone-success",
                    }>
                        {move || active.get().verdict()}
                    </div>
                    <div class="comparison-table">
                        {WALLET_FEATURES.iter().map(|feature| view! {
                            <div class="feature-row">
                                <span class="feature-name">{feature.name}</span>
                                <span class="feature-value">
                                    {move || {
                                        let kind = active.get();
                                        let mark = if kind == WalletKind::Hot { "✗" } else { "✓" };
                                        format!("{} {}", mark, feature.value_for(kind))
                                    }}
                                </span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="pro-tip">
                    <p class="pro-tip-title">"Pro Tip"</p>
                    <p>
                        "Use a hot wallet for day-to-day transactions with small amounts. Keep the majority "
                        "of your holdings in cold storage. Never store your seed phrase digitally."
                    </p>
                </div>
            </div>
        </section>
    }
}
