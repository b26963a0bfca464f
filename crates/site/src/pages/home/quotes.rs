use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Quote {
    text: &'static str,
    author: &'static str,
    handle: &'static str,
    href: &'static str,
}

fn quote_wall() -> Vec<Quote> {
    vec![
        Quote {
            text: "Shipped a working model demo to the whole team in an afternoon. \
                   The gap between notebook and shareable app is just gone.",
            author: "Maya Lindqvist",
            handle: "@mayalindqvist",
            href: "https://twitter.com/mayalindqvist/status/1",
        },
        Quote {
            text: "trellis is what finally let our researchers stop emailing \
                   screenshots of matplotlib windows.",
            author: "Denis Okafor",
            handle: "@denisokafor",
            href: "https://twitter.com/denisokafor/status/2",
        },
        Quote {
            text: "The embed story is excellent. One line and the live demo sits \
                   inside our docs.",
            author: "Ruth Salomon",
            handle: "@ruthsalomon",
            href: "https://twitter.com/ruthsalomon/status/3",
        },
    ]
}

#[component]
pub fn QuoteWall() -> impl IntoView {
    view! {
        <section class="quote-wall">
            <h2 class="quote-wall__heading">"What people are saying"</h2>
            <div class="quote-wall__items">
                {quote_wall().into_iter().map(|quote| view! {
                    <a class="quote-card" href=quote.href target="_blank" rel="noopener">
                        <span class="quote-card__mark">{icon("quote")}</span>
                        <p class="quote-card__text">{quote.text}</p>
                        <span class="quote-card__author">{quote.author}</span>
                        <span class="quote-card__handle">{quote.handle}</span>
                    </a>
                }).collect_view()}
            </div>
        </section>
    }
}
