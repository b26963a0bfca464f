mod hero;
mod logos;
mod quotes;

use crate::shared::github::StarButton;
use hero::Hero;
use leptos::prelude::*;
use logos::LogoWall;
use quotes::QuoteWall;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <LogoWall />
            <QuoteWall />
            <section class="star-cta">
                <h2>"Like what you see?"</h2>
                <p>"Development happens in the open. A star helps more people find the project."</p>
                <StarButton />
            </section>
        </div>
    }
}
