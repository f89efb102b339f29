//! Scam Catalog Component
//!
//! Searchable, filterable grid of scam cards with a display cap and the
//! detail modal. Owns its own `CatalogStore`.

use leptos::prelude::*;

use crate::catalog::SCAM_CATEGORIES;
use crate::components::{CategoryTabs, ScamCard, ScamModal};
use crate::context::use_site;
use crate::filter::{filter_scams, CatalogPage, CategoryFilter};
use crate::store::{
    new_catalog_store, store_clear_filters, store_close_detail, store_handle_key, store_open_detail,
    store_set_filter, store_set_query, store_show_more, CatalogViewStoreFields,
};

#[component]
pub fn ScamCatalog() -> impl IntoView {
    let cap = use_site().with_config(|c| c.display_cap);
    let store = new_catalog_store();

    // Recomputed from scratch on every filter or query change
    let filtered = Memo::new(move |_| {
        let filter = store.filter().get();
        store.query().with(|query| filter_scams(SCAM_CATEGORIES, filter, query))
    });
    let page = Memo::new(move |_| CatalogPage::new(filtered.get(), store.show_all().get(), cap));

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        store_handle_key(&store, &ev.key());
    });
    on_cleanup(move || escape.remove());

    view! {
        <section id="scams" class="section catalog-section">
            <div class="container">
                <div class="section-header">
                    <span class="section-badge badge-alert">"Know Your Enemy"</span>
                    <h2>"The Scam " <span class="gradient-text-alert">"Library"</span></h2>
                    <p class="section-lead">
                        "Click any card to learn the attack pattern and your defense strategy."
                    </p>
                </div>

                <div class="catalog-controls">
                    <input
                        type="search"
                        class="catalog-search"
                        placeholder="Search scams..."
                        aria-label="Search scams"
                        prop:value=move || store.query().get()
                        on:input=move |ev| store_set_query(&store, event_target_value(&ev))
                    />
                    <CategoryTabs
                        current=Signal::derive(move || store.filter().get())
                        on_change=move |filter: CategoryFilter| store_set_filter(&store, filter)
                    />
                </div>

                <p class="catalog-summary">
                    {move || page.with(|p| format!("Showing {} of {}", p.shown.len(), p.total))}
                </p>

                <Show
                    when=move || !page.with(|p| p.is_empty())
                    fallback=move || view! {
                        <div class="no-results" role="status">
                            <p>"No scams match your search."</p>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| store_clear_filters(&store)
                            >
                                "Clear filters"
                            </button>
                        </div>
                    }
                >
                    <div class="scam-grid">
                        <For
                            each=move || page.get().shown
                            key=|scam| scam.id
                            children=move |scam| view! {
                                <ScamCard
                                    scam=scam
                                    on_open=move |id: u32| store_open_detail(&store, id)
                                />
                            }
                        />
                    </div>
                </Show>

                <Show when=move || page.with(|p| p.hidden() > 0)>
                    <div class="show-more-row">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| store_show_more(&store)
                        >
                            {move || format!("Show {} more", page.with(|p| p.hidden()))}
                        </button>
                    </div>
                </Show>
            </div>

            <ScamModal
                selected=Signal::derive(move || store.selected().get())
                on_close=move |_: ()| store_close_detail(&store)
            />
        </section>
    }
}
