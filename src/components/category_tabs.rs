//! Category Tabs Component
//!
//! "All" plus one button per scam category, each with its record count.

use leptos::prelude::*;

use crate::catalog::SCAM_CATEGORIES;
use crate::filter::{category_tabs, CategoryFilter};

/// Category selector buttons for the catalog
#[component]
pub fn CategoryTabs(
    current: Signal<CategoryFilter>,
    #[prop(into)] on_change: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <div class="category-tabs" role="tablist">
            {category_tabs(SCAM_CATEGORIES).into_iter().map(|tab| {
                let filter = tab.filter;
                let is_selected = move || current.get() == filter;
                view! {
                    <button
                        type="button"
                        role="tab"
                        class=move || if is_selected() { "category-tab active" } else { "category-tab" }
                        aria-selected=move || is_selected().to_string()
                        on:click=move |_| on_change.run(filter)
                    >
                        {tab.icon.map(|icon| view! { <span class="tab-icon">{icon}</span> })}
                        <span class="tab-label">{tab.label}</span>
                        <span class="tab-count">{tab.count}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
