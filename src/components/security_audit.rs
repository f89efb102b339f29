//! Security Audit Component
//!
//! Self-assessment checklist with live status and a one-shot completion banner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::checklist::{Checklist, StatusTier};
use crate::content::CHECKLIST_ITEMS;
use crate::context::use_site;

#[component]
pub fn SecurityAudit() -> impl IntoView {
    let celebration_ms = use_site().with_config(|c| c.celebration_ms);

    let checklist = RwSignal::new(Checklist::new(CHECKLIST_ITEMS.len()));
    let (celebrating, set_celebrating) = signal(false);
    // Bumped per celebration so an older timer cannot hide a newer banner
    let celebration_gen = StoredValue::new(0u32);

    let status = Memo::new(move |_| checklist.with(|list| list.status()));
    let progress = Memo::new(move |_| checklist.with(|list| list.progress()));

    let toggle = move |id: u32| {
        let completed = checklist.try_update(|list| list.toggle(id)).unwrap_or(false);
        if !completed {
            return;
        }
        tracing::info!("security checklist completed");
        let gen = celebration_gen.get_value().wrapping_add(1);
        celebration_gen.set_value(gen);
        set_celebrating.set(true);
        spawn_local(async move {
            TimeoutFuture::new(celebration_ms).await;
            if celebration_gen.get_value() == gen {
                set_celebrating.set(false);
            }
        });
    };

    view! {
        <section id="audit" class="section audit-section">
            <div class="container">
                <div class="section-header">
                    <span class="section-badge badge-primary">"Interactive"</span>
                    <h2>"60-Second " <span class="gradient-text">"Security Audit"</span></h2>
                    <p class="section-lead">
                        "Check off each security practice you follow. Watch your security status improve."
                    </p>
                </div>

                <div class="audit-body">
                    <div class=move || format!("audit-status tone-{}", status.get().tone())>
                        <div class="audit-status-text">
                            <span class="audit-status-icon">
                                {move || if status.get() == StatusTier::Excellent { "🛡️" } else { "⚠️" }}
                            </span>
                            <div>
                                <p class="audit-status-label">{move || status.get().label()}</p>
                                <p class="audit-status-summary">{move || checklist.with(|list| list.summary())}</p>
                            </div>
                        </div>
                        <p class="audit-percent">{move || format!("{}%", progress.get().round() as u32)}</p>
                    </div>

                    <div class="progress-track">
                        <div
                            class=move || format!("progress-fill bg-{}", status.get().tone())
                            style:width=move || format!("{}%", progress.get())
                        ></div>
                    </div>

                    <Show when=move || celebrating.get()>
                        <div class="celebration" role="status">
                            "🎉 Perfect score! You follow every practice on the list."
                        </div>
                    </Show>

                    <div class="checklist">
                        {CHECKLIST_ITEMS.iter().map(|item| {
                            let id = item.id;
                            let checked = move || checklist.with(|list| list.is_checked(id));
                            view! {
                                <button
                                    type="button"
                                    class=move || if checked() { "checklist-item checked" } else { "checklist-item" }
                                    aria-pressed=move || checked().to_string()
                                    on:click=move |_| toggle(id)
                                >
                                    <span class="checkbox">{move || if checked() { "✓" } else { "" }}</span>
                                    <div>
                                        <p class="checklist-label">{item.label}</p>
                                        <p class="checklist-category">{item.category}</p>
                                    </div>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
