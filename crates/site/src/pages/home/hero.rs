use crate::layout::context::{Page, SiteContext};
use crate::shared::components::ui::Button;
use crate::shared::components::CodeBlock;
use leptos::prelude::*;

const QUICKSTART_SNIPPET: &str = r#"use trellis::prelude::*;

fn greet(name: String) -> String {
    format!("Hello, {name}!")
}

fn main() {
    Demo::new(greet)
        .title("Greeter")
        .launch();
}"#;

#[component]
pub fn Hero() -> impl IntoView {
    let site =
        leptos::context::use_context::<SiteContext>().expect("SiteContext context not found");

    let open_docs = Callback::new(move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("https://docs.trellis.dev/quickstart");
        }
    });

    view! {
        <section class="hero">
            <div class="hero__copy">
                <h1 class="hero__headline">
                    "Build & share delightful data apps. All in Rust."
                </h1>
                <p class="hero__subhead">
                    "Wrap any function in an interactive, shareable web demo "
                    "with a few lines of code. No frontend experience required."
                </p>
                <div class="hero__actions">
                    <Button size="lg" on_click=open_docs>
                        "Get started"
                    </Button>
                    <Button
                        variant="secondary"
                        size="lg"
                        on_click=Callback::new(move |_| site.navigate(Page::Demos))
                    >
                        "Browse demos"
                    </Button>
                </div>
            </div>
            <div class="hero__snippet">
                <CodeBlock code=QUICKSTART_SNIPPET.to_string() />
            </div>
        </section>
    }
}
