use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
struct LogoItem {
    name: &'static str,
    href: &'static str,
}

fn logo_wall() -> Vec<LogoItem> {
    vec![
        LogoItem { name: "Nimbus Research", href: "https://nimbus.example" },
        LogoItem { name: "Quanta Labs", href: "https://quanta.example" },
        LogoItem { name: "Helio AI", href: "https://helio.example" },
        LogoItem { name: "Fieldnote", href: "https://fieldnote.example" },
        LogoItem { name: "Arcadia ML", href: "https://arcadia.example" },
        LogoItem { name: "Driftwave", href: "https://driftwave.example" },
    ]
}

#[component]
pub fn LogoWall() -> impl IntoView {
    view! {
        <section class="logo-wall">
            <span class="logo-wall__caption">"Used by teams at"</span>
            <ul class="logo-wall__items">
                {logo_wall().into_iter().map(|logo| view! {
                    <li class="logo-wall__item">
                        <a href=logo.href target="_blank" rel="noopener">{logo.name}</a>
                    </li>
                }).collect_view()}
            </ul>
        </section>
    }
}
