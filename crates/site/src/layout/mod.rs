pub mod context;
pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Site shell: header, routed page content, footer.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <header::Header />
            <main class="site-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
