use super::api;
use crate::shared::format::format_star_count;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// GitHub badge with a live star count.
///
/// The count is cosmetic: when the fetch fails the badge renders without a
/// number and the failure is only logged.
#[component]
pub fn StarButton() -> impl IntoView {
    let stars = RwSignal::new(None::<u64>);

    Effect::new(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_star_count().await {
                Ok(count) => stars.set(Some(count)),
                Err(err) => log::debug!("star count unavailable: {err}"),
            }
        });
    });

    view! {
        <a class="star-button" href=api::REPO_URL target="_blank" rel="noopener">
            {icon("github")}
            <span class="star-button__label">"Star"</span>
            <Show when=move || stars.get().is_some()>
                <span class="star-button__count">
                    {move || stars.get().map(format_star_count).unwrap_or_default()}
                </span>
            </Show>
        </a>
    }
}
