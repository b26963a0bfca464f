use leptos::prelude::*;
use web_sys::window;

/// Routed pages of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Demos,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Page::Home,
            "/demos" => Page::Demos,
            _ => Page::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Demos => "/demos",
            Page::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Trellis: build & share interactive data apps",
            Page::Demos => "Trellis demos",
            Page::NotFound => "Page not found",
        }
    }
}

#[derive(Clone, Copy)]
pub struct SiteContext {
    pub page: RwSignal<Page>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Home),
        }
    }

    /// Reads the initial page from the address bar, then keeps the bar and
    /// the document title in sync with navigation.
    pub fn init_router_integration(&self) {
        let initial = window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Page::from_path(&path))
            .unwrap_or_default();
        self.page.set(initial);

        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            let Some(w) = window() else {
                return;
            };
            if let Some(document) = w.document() {
                document.set_title(page.title());
            }
            if page == Page::NotFound {
                // Keep whatever address produced the miss.
                return;
            }
            let current = w.location().pathname().unwrap_or_default();
            if current != page.path() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(page.path()),
                    );
                }
                w.scroll_to_with_x_and_y(0.0, 0.0);
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        self.page.set(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/demos"), Page::Demos);
        assert_eq!(Page::from_path("/demos/"), Page::Demos);
        assert_eq!(Page::from_path("/nope"), Page::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for page in [Page::Home, Page::Demos] {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }
}
