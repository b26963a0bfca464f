use super::model::TabModel;
use super::registry::{demo_embed_url, DEMO_ENTRIES};
use crate::shared::components::CodeBlock;
use leptos::logging::warn;
use leptos::prelude::*;

/// Tabbed demo browser. All panes stay mounted; selecting a tab only swaps
/// visibility, so an embedded demo keeps its state while hidden.
#[component]
pub fn DemoShowcase() -> impl IntoView {
    let model = RwSignal::new(TabModel::new(DEMO_ENTRIES.clone()));

    let select = move |index: usize| {
        model.update(|m| {
            if let Err(err) = m.select(index) {
                warn!("demo tab selection rejected: {err}");
            }
        });
    };

    view! {
        <div class="showcase">
            <div class="showcase__tabs" role="tablist">
                {DEMO_ENTRIES.iter().enumerate().map(|(index, entry)| {
                    let is_active = move || model.with(|m| m.is_active(index));
                    view! {
                        <button
                            class="showcase__tab"
                            class:is-active=is_active
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| select(index)
                        >
                            {entry.title}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="showcase__panes">
                {DEMO_ENTRIES.iter().enumerate().map(|(index, entry)| {
                    let hidden = move || model.with(|m| !m.is_active(index));
                    view! {
                        <div class="showcase__pane" class:hidden=hidden role="tabpanel">
                            {entry.code.map(|code| view! {
                                <CodeBlock code=code.to_string() />
                            })}
                            <iframe
                                class="showcase__frame"
                                src=demo_embed_url(entry.demo_id)
                                title=entry.title
                                {leptos::attr::loading("lazy")}
                            ></iframe>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
