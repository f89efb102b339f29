//! Navbar Component

use leptos::prelude::*;

use crate::context::use_site;

/// In-page anchors
const NAV_LINKS: &[(&str, &str)] = &[
    ("#scams", "Scam Types"),
    ("#audit", "Security Audit"),
    ("#tips", "Protection Tips"),
    ("#faq", "FAQ"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let site_name = use_site().with_config(|c| c.site_name.clone());
    let (menu_open, set_menu_open) = signal(false);

    let links = move |class: &'static str| {
        NAV_LINKS.iter().map(|(href, label)| view! {
            <a class=class href=*href on:click=move |_| set_menu_open.set(false)>{*label}</a>
        }).collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="container navbar-row">
                <a href="/" class="brand">
                    <span class="brand-icon">"🛡️"</span>
                    <span class="brand-name">{site_name}</span>
                </a>
                <div class="nav-links">
                    {links("nav-link")}
                    <a class="btn btn-primary btn-sm" href="#scams">"Get Protected"</a>
                </div>
                <button
                    type="button"
                    class="nav-menu-btn"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="nav-mobile">{links("nav-mobile-link")}</div>
            </Show>
        </nav>
    }
}
