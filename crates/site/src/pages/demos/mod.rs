pub mod model;
pub mod registry;
mod showcase;

use leptos::prelude::*;
use showcase::DemoShowcase;

#[component]
pub fn DemosPage() -> impl IntoView {
    view! {
        <div class="demos-page">
            <section class="demos-page__intro">
                <h1>"Demos"</h1>
                <p>
                    "Each demo below runs live from the hosted gallery. "
                    "Pick a tab to see the app next to the code that built it."
                </p>
            </section>
            <DemoShowcase />
        </div>
    }
}
