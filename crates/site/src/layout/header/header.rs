use crate::layout::context::{Page, SiteContext};
use crate::layout::header::nav::NavLinks;
use crate::shared::github::StarButton;
use crate::shared::icons::icon;
use crate::shared::responsive::use_responsive;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let site =
        leptos::context::use_context::<SiteContext>().expect("SiteContext context not found");
    let responsive = use_responsive();
    let (menu_open, set_menu_open) = signal(false);

    let desktop = move || responsive.matches("lg");

    // Crossing back above the breakpoint discards the drawer state.
    Effect::new(move |_| {
        if desktop() {
            set_menu_open.set(false);
        }
    });

    view! {
        <header class="header">
            <div class="header__inner">
                <button class="header__logo" on:click=move |_| site.navigate(Page::Home)>
                    <span class="header__logo-mark">"◫"</span>
                    <span class="header__logo-word">"trellis"</span>
                </button>

                <Show when=desktop>
                    <div class="header__nav">
                        <NavLinks />
                        <StarButton />
                    </div>
                </Show>

                <Show when=move || !desktop()>
                    <button
                        class="header__menu-toggle"
                        aria-label="Toggle navigation"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { icon("close") } else { icon("menu") }}
                    </button>
                </Show>
            </div>

            <Show when=move || !desktop() && menu_open.get()>
                <div class="header__drawer">
                    <NavLinks on_select=Callback::new(move |_| set_menu_open.set(false)) />
                    <StarButton />
                </div>
            </Show>
        </header>
    }
}
