//! WASM bindings for `brief-md`.
//!
//! Exposes the renderer and the speech cleaner to the page via wasm-bindgen.
//! Call `render_markdown()` with the model's raw answer to get an HTML
//! fragment, or `clean_for_speech()` for text to hand to the narrator.

use brief_md::{AnalysisReport, NarrationLabels, Renderer, Styles};
use wasm_bindgen::prelude::*;

/// Render an AI answer as an HTML fragment with the built-in inline styles.
#[wasm_bindgen]
pub fn render_markdown(input: &str) -> String {
    brief_md::render(input)
}

/// Render an AI answer with style overrides given as a JSON object.
///
/// Keys match the `Styles` fields in camelCase (`codeBlock`, `listItem`, …).
/// Invalid JSON falls back to the default styles.
#[wasm_bindgen]
pub fn render_markdown_styled(input: &str, styles_json: &str) -> String {
    let styles: Styles = serde_json::from_str(styles_json).unwrap_or_default();
    Renderer::new(styles).render(input)
}

/// Strip markdown from an AI answer for text-to-speech.
#[wasm_bindgen]
pub fn clean_for_speech(input: &str) -> String {
    brief_md::clean(input)
}

/// Parse a raw model response as a case-analysis report and narrate it.
///
/// Returns `{ "ok": true, "text": … }` or `{ "ok": false, "error": … }`.
#[wasm_bindgen]
pub fn narrate_report(raw: &str) -> String {
    match AnalysisReport::from_model_output(raw) {
        Ok(report) => serde_json::json!({ "ok": true, "text": report.to_speech() }),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
    }
    .to_string()
}

/// Narrate a report object that the page already holds.
///
/// `labels` may be `undefined` to use the default section labels.
#[wasm_bindgen]
pub fn narrate_report_value(report: JsValue, labels: JsValue) -> Result<String, JsError> {
    let report: AnalysisReport = serde_wasm_bindgen::from_value(report)?;
    report.validate()?;
    let labels: NarrationLabels = if labels.is_undefined() || labels.is_null() {
        NarrationLabels::default()
    } else {
        serde_wasm_bindgen::from_value(labels)?
    };
    Ok(brief_md::narrate_report(&report, &labels))
}
