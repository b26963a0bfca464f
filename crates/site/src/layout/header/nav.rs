use crate::layout::context::{Page, SiteContext};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub enum NavTarget {
    Page(Page),
    External(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

pub fn primary_nav() -> Vec<NavItem> {
    vec![
        NavItem { label: "Getting Started", target: NavTarget::Page(Page::Home) },
        NavItem { label: "Demos", target: NavTarget::Page(Page::Demos) },
        NavItem { label: "Docs", target: NavTarget::External("https://docs.trellis.dev") },
        NavItem { label: "Guides", target: NavTarget::External("https://docs.trellis.dev/guides") },
    ]
}

/// Primary navigation list. Used twice: inline in the desktop header and
/// inside the collapsed drawer below the `lg` breakpoint.
#[component]
pub fn NavLinks(
    /// Invoked after an in-site link is followed (closes the drawer)
    #[prop(optional)]
    on_select: Option<Callback<()>>,
) -> impl IntoView {
    let site =
        leptos::context::use_context::<SiteContext>().expect("SiteContext context not found");

    view! {
        <ul class="nav">
            {primary_nav().into_iter().map(|item| {
                let label = item.label;
                match item.target {
                    NavTarget::Page(page) => view! {
                        <li class="nav__item">
                            <button
                                class="nav__link"
                                class:is-active=move || site.page.get() == page
                                on:click=move |_| {
                                    site.navigate(page);
                                    if let Some(callback) = on_select {
                                        callback.run(());
                                    }
                                }
                            >
                                {label}
                            </button>
                        </li>
                    }
                    .into_any(),
                    NavTarget::External(href) => view! {
                        <li class="nav__item">
                            <a class="nav__link" href=href target="_blank" rel="noopener">
                                {label}
                            </a>
                        </li>
                    }
                    .into_any(),
                }
            }).collect_view()}
        </ul>
    }
}
