use crate::shared::github::api::REPO_URL;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
struct FooterLink {
    label: &'static str,
    href: &'static str,
}

fn footer_columns() -> Vec<(&'static str, Vec<FooterLink>)> {
    vec![
        (
            "Project",
            vec![
                FooterLink { label: "Docs", href: "https://docs.trellis.dev" },
                FooterLink { label: "Guides", href: "https://docs.trellis.dev/guides" },
                FooterLink { label: "Changelog", href: "https://docs.trellis.dev/changelog" },
            ],
        ),
        (
            "Community",
            vec![
                FooterLink { label: "GitHub", href: REPO_URL },
                FooterLink { label: "Discord", href: "https://discord.gg/trellis" },
                FooterLink { label: "Twitter", href: "https://twitter.com/trellis_ml" },
            ],
        ),
        (
            "Hosting",
            vec![
                FooterLink { label: "Demo gallery", href: "https://demos.trellis.dev" },
                FooterLink { label: "Status", href: "https://status.trellis.dev" },
            ],
        ),
    ]
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer__columns">
                {footer_columns().into_iter().map(|(heading, links)| view! {
                    <div class="footer__column">
                        <span class="footer__heading">{heading}</span>
                        <ul class="footer__links">
                            {links.into_iter().map(|link| view! {
                                <li>
                                    <a href=link.href target="_blank" rel="noopener">
                                        {link.label}
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                }).collect_view()}
            </div>
            <div class="footer__meta">
                {format!("© {year} the Trellis contributors. Apache-2.0 licensed.")}
            </div>
        </footer>
    }
}
