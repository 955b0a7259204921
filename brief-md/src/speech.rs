//! Reduce markdown to prose a speech synthesiser can read aloud.
//!
//! Lossy and one-way. Passes run in a fixed order: line-level markers first
//! (fences, rules, bullets, headings), then links and emphasis, then table
//! pipes, then leftover marker characters and whitespace. Inline code is held
//! aside from the emphasis passes and read out as written.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::inline::{protect_code_spans, restore_code_spans};
use crate::report::AnalysisReport;

/// Spoken in place of a table column boundary.
pub const PAUSE: &str = ", ";

static FENCE_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*```.*$\n?").unwrap());
// A heading marker may sit behind an ordered-list number, which is kept.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*\d+\.[ \t]+)?[ \t]*#{1,6}[ \t]*").unwrap());
static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*([*_-][ \t]*){3,}$\n?").unwrap());
static TABLE_SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\|?[ \t]*:?-+:?[ \t]*(\|[ \t]*:?-+:?[ \t]*)*\|?[ \t]*$\n?").unwrap()
});
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[*+-][ \t]+").unwrap());
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());
static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static UNDERSCORE_BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^A-Za-z0-9])__([^_]+?)__").unwrap());
static UNDERSCORE_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^A-Za-z0-9])_([^_]+?)_").unwrap());
static ROW_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\|[ \t]*").unwrap());
static ROW_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]*\|[ \t]*$").unwrap());
static INNER_PIPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]*\|[ \t]*").unwrap());
static LEFTOVER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*`]").unwrap());
static SPACES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strip markdown from `text`, leaving plain prose.
pub fn clean(text: &str) -> String {
    let text = text.replace("\r\n", "\n");

    let text = FENCE_LINE_RE.replace_all(&text, "");
    let text = RULE_RE.replace_all(&text, "");
    let text = TABLE_SEPARATOR_RE.replace_all(&text, "");
    let text = BULLET_RE.replace_all(&text, "");
    let text = HEADING_RE.replace_all(&text, "${1}");

    // Code content is read verbatim, so it sits out the emphasis passes.
    let (text, spans) = protect_code_spans(&text);

    // Images before links: `![alt](src)` also matches the link pattern.
    let text = IMAGE_RE.replace_all(&text, "${1}");
    let text = LINK_RE.replace_all(&text, "${1}");

    let text = BOLD_ITALIC_RE.replace_all(&text, "${1}");
    let text = BOLD_RE.replace_all(&text, "${1}");
    let text = ITALIC_RE.replace_all(&text, "${1}");
    let text = UNDERSCORE_BOLD_RE.replace_all(&text, "${1}${2}");
    let text = UNDERSCORE_ITALIC_RE.replace_all(&text, "${1}${2}");

    let text = ROW_START_RE.replace_all(&text, "");
    let text = ROW_END_RE.replace_all(&text, "");
    let text = INNER_PIPE_RE.replace_all(&text, PAUSE);

    let text = LEFTOVER_RE.replace_all(&text, "");
    let text = restore_code_spans(&text, &spans, str::to_string);
    let text = SPACES_RE.replace_all(&text, " ");

    let text: Vec<&str> = text.lines().map(str::trim).collect();
    BLANK_RUN_RE
        .replace_all(&text.join("\n"), "\n\n")
        .trim()
        .to_string()
}

/// Section labels spoken before each part of a narrated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NarrationLabels {
    pub summary: String,
    pub key_points: String,
    pub insights: String,
    pub legislation: String,
}

impl Default for NarrationLabels {
    fn default() -> Self {
        Self {
            summary: "Summary".into(),
            key_points: "Key points".into(),
            insights: "Legal insights".into(),
            legislation: "Relevant legislation".into(),
        }
    }
}

/// Narrate `report` with the default labels.
pub fn narrate(report: &AnalysisReport) -> String {
    narrate_report(report, &NarrationLabels::default())
}

/// Fold a report into one narration string, then [`clean`] it.
pub fn narrate_report(report: &AnalysisReport, labels: &NarrationLabels) -> String {
    let mut sections = vec![format!("{}: {}", labels.summary, report.summary.trim())];

    if !report.key_points.is_empty() {
        let mut section = format!("{}:", labels.key_points);
        for point in &report.key_points {
            section.push('\n');
            section.push_str(point.trim());
        }
        sections.push(section);
    }

    if !report.insights.is_empty() {
        let mut section = format!("{}:", labels.insights);
        for item in &report.insights {
            section.push('\n');
            let insight = item.insight.trim();
            if item.legislation.trim().is_empty() {
                section.push_str(insight);
            } else {
                section.push_str(&format!(
                    "{}. {}: {}.",
                    insight.trim_end_matches('.'),
                    labels.legislation,
                    item.legislation.trim().trim_end_matches('.')
                ));
            }
        }
        sections.push(section);
    }

    clean(&sections.join("\n\n"))
}
