//! CryptoSafe App
//!
//! Single-page shell composing every section in document order.

use leptos::prelude::*;

use crate::components::{
    Faq, Footer, Hero, Navbar, Overview, ScamCatalog, SecurityAudit, Tips, Toast, WalletComparison,
};
use crate::config::SiteConfig;
use crate::context::SiteContext;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(SiteContext::new(config));

    view! {
        <div class="page">
            <Navbar />
            <main role="main">
                <article>
                    <Hero />
                    <Overview />
                    <ScamCatalog />
                </article>
                <aside>
                    <WalletComparison />
                </aside>
                <section aria-label="Security tools">
                    <SecurityAudit />
                </section>
                <Tips />
                <section aria-label="Frequently asked questions">
                    <Faq />
                </section>
            </main>
            <Footer />
            <Toast />
        </div>
    }
}
