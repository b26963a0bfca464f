use crate::layout::context::{Page, SiteContext};
use crate::shared::components::ui::Button;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let site =
        leptos::context::use_context::<SiteContext>().expect("SiteContext context not found");

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"There is nothing growing at this address."</p>
            <Button on_click=Callback::new(move |_| site.navigate(Page::Home))>
                "Back to the start"
            </Button>
        </div>
    }
}
