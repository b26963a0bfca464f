use crate::shared::icons::icon;
use leptos::prelude::*;

/// Code snippet with a copy-to-clipboard button.
#[component]
pub fn CodeBlock(
    /// Source text to display and copy
    code: String,
    /// Language hint for the highlighter class (default: "rust")
    #[prop(optional, into)]
    language: MaybeProp<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let code_for_copy = code.clone();
    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let content = code_for_copy.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let promise = clipboard.write_text(&content);
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
        set_copied.set(true);

        // Reset after 2 seconds
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    let language_class = move || {
        format!(
            "code-block__source language-{}",
            language.get().unwrap_or_else(|| "rust".to_string())
        )
    };

    view! {
        <div class="code-block">
            <button class="code-block__copy" on:click=handle_copy title="Copy to clipboard">
                {move || if copied.get() { icon("check") } else { icon("copy") }}
            </button>
            <pre class=language_class>
                <code>{code}</code>
            </pre>
        </div>
    }
}
