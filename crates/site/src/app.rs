use crate::layout::context::SiteContext;
use crate::routes::AppRoutes;
use crate::shared::responsive::ResponsiveProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the SiteContext store to the whole app via context.
    provide_context(SiteContext::new());

    view! {
        <ResponsiveProvider>
            <AppRoutes />
        </ResponsiveProvider>
    }
}
