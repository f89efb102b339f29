//! Scam Detail Modal Component
//!
//! Full record view. Visible while a record is selected; the backdrop and
//! the close button both clear the selection.

use leptos::prelude::*;

use crate::catalog::{find_category, find_scam, numbered_steps};

#[component]
pub fn ScamModal(
    selected: Signal<Option<u32>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    move || {
        selected.get().and_then(find_scam).map(|scam| {
            let category = find_category(scam.category);
            view! {
                <div class="modal-overlay" on:click=move |_| on_close.run(())>
                    <div
                        class="modal"
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby="scam-modal-title"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <button
                            type="button"
                            class="modal-close"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>

                        <div class="modal-badges">
                            {category.map(|cat| view! {
                                <span class=format!("category-badge {}", cat.color)>
                                    <span>{cat.icon}</span>
                                    {cat.name}
                                </span>
                            })}
                            <span class=scam.risk_level.badge_class()>
                                {format!("{} Risk", scam.risk_level.label())}
                            </span>
                        </div>

                        <h2 id="scam-modal-title" class="modal-title">{scam.title}</h2>
                        <p class="modal-description">{scam.description}</p>

                        <div class="modal-block">
                            <h3 class="modal-block-title text-alert">"⚠ How The Scam Works"</h3>
                            <ol class="step-list">
                                {numbered_steps(scam.how_it_works).into_iter().map(|(n, step)| view! {
                                    <li class="step">
                                        <span class="step-index">{n}</span>
                                        <p>{step}</p>
                                    </li>
                                }).collect_view()}
                            </ol>
                        </div>

                        <div class="modal-block defense-block">
                            <h3 class="modal-block-title text-success">"🛡 Defense Strategy"</h3>
                            <ol class="step-list">
                                {numbered_steps(scam.defense).into_iter().map(|(n, tip)| view! {
                                    <li class="step">
                                        <span class="step-index step-index-success">{n}</span>
                                        <p>{tip}</p>
                                    </li>
                                }).collect_view()}
                            </ol>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
