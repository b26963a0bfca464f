//! Static demo catalog rendered by the showcase. The list is the single
//! source of truth for tab order; the first entry is the landing tab.

use super::model::DemoEntry;
use once_cell::sync::Lazy;

const SKETCH_SNIPPET: &str = r#"use trellis::prelude::*;

fn classify(sketch: Image) -> Vec<(String, f32)> {
    MODEL.with(|m| m.top_k(&sketch, 3))
}

fn main() {
    Demo::new(classify)
        .input(Sketchpad::new())
        .output(Label::new())
        .live(true)
        .launch();
}"#;

const TRANSLATION_SNIPPET: &str = r#"use trellis::prelude::*;

fn translate(text: String, target: Language) -> String {
    TRANSLATOR.with(|t| t.run(&text, target))
}

fn main() {
    Demo::new(translate)
        .input(Textbox::new().lines(4))
        .input(Dropdown::of::<Language>())
        .output(Textbox::new())
        .launch();
}"#;

const AUDIO_SNIPPET: &str = r#"use trellis::prelude::*;

fn transcribe(recording: Audio) -> String {
    WHISPERER.with(|w| w.transcribe(&recording))
}

fn main() {
    Demo::new(transcribe)
        .input(Microphone::new())
        .output(Textbox::new())
        .launch();
}"#;

const TIMESERIES_SNIPPET: &str = r#"use trellis::prelude::*;

fn forecast(horizon: u32, series: DataFrame) -> Plot {
    Plot::line(FORECASTER.with(|f| f.extend(&series, horizon)))
}

fn main() {
    Demo::new(forecast)
        .input(Slider::new(1..=90).label("Days ahead"))
        .input(FileDrop::csv())
        .output(Plot::viewer())
        .launch();
}"#;

pub static DEMO_ENTRIES: Lazy<Vec<DemoEntry>> = Lazy::new(|| {
    vec![
        DemoEntry {
            title: "Sketch Recognition",
            code: Some(SKETCH_SNIPPET),
            demo_id: "trellis/sketch-recognition",
        },
        DemoEntry {
            title: "Translation",
            code: Some(TRANSLATION_SNIPPET),
            demo_id: "trellis/translation",
        },
        DemoEntry {
            title: "Speech to Text",
            code: Some(AUDIO_SNIPPET),
            demo_id: "trellis/speech-to-text",
        },
        DemoEntry {
            title: "Time Series Forecast",
            code: Some(TIMESERIES_SNIPPET),
            demo_id: "trellis/timeseries-forecast",
        },
        DemoEntry {
            title: "Community Gallery",
            code: None,
            demo_id: "trellis/gallery",
        },
    ]
});

/// Address of the hosted, embeddable build of a demo.
pub fn demo_embed_url(demo_id: &str) -> String {
    format!("https://demos.trellis.dev/embed/{demo_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_nonempty_with_unique_ids() {
        assert!(!DEMO_ENTRIES.is_empty());
        let mut ids: Vec<_> = DEMO_ENTRIES.iter().map(|e| e.demo_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DEMO_ENTRIES.len());
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            demo_embed_url("trellis/gallery"),
            "https://demos.trellis.dev/embed/trellis/gallery"
        );
    }
}
