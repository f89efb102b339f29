//! FAQ Component
//!
//! Single-open accordion. Answers are inline Markdown.

use leptos::prelude::*;

use crate::accordion::Accordion;
use crate::content::FAQS;
use crate::markdown::parse_markdown_inline;

#[component]
pub fn Faq() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section id="faq" class="section faq-section">
            <div class="container narrow">
                <div class="section-header">
                    <span class="section-badge badge-primary">"Got Questions?"</span>
                    <h2>"Frequently Asked " <span class="gradient-text">"Questions"</span></h2>
                    <p class="section-lead">"Common questions about keeping your crypto safe from scammers."</p>
                </div>

                <div class="faq-list">
                    {FAQS.iter().enumerate().map(|(index, faq)| {
                        let is_open = move || accordion.with(|acc| acc.is_open(index));
                        view! {
                            <div class=move || if is_open() { "faq-item open" } else { "faq-item" }>
                                <button
                                    type="button"
                                    class="faq-question"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| accordion.update(|acc| acc.toggle(index))
                                >
                                    <span>{faq.question}</span>
                                    <span class="faq-chevron">{move || if is_open() { "−" } else { "+" }}</span>
                                </button>
                                <div
                                    class="faq-answer"
                                    hidden=move || !is_open()
                                    inner_html=parse_markdown_inline(faq.answer)
                                ></div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
