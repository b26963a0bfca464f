use crate::layout::context::{Page, SiteContext};
use crate::layout::Shell;
use crate::pages::demos::DemosPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let site =
        leptos::context::use_context::<SiteContext>().expect("SiteContext context not found");

    // Initialize address-bar integration. This runs once when the component is created.
    site.init_router_integration();

    view! {
        <Shell>
            {move || match site.page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Demos => view! { <DemosPage /> }.into_any(),
                Page::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </Shell>
    }
}
