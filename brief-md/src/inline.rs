//! Inline formatting: emphasis, strong, and code spans inside a single
//! paragraph, list item, or table cell.
//!
//! Code spans are swapped for placeholders before the emphasis passes and put
//! back afterwards, so emphasis may wrap a code span but never reaches inside
//! one. Everything is HTML-escaped before any tag is inserted.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::styles::{Styles, open_tag};

/// Delimits a code-span placeholder. Private-use, so it never appears in
/// model text; stray occurrences are replaced before protection.
const SENTINEL: char = '\u{E000}';

static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{E000}([0-9]+)\x{E000}").unwrap());
static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
// Opening underscore must follow a non-alphanumeric character (or start the
// text) so identifiers like `child_support_amount` stay intact. The closing
// side is checked in `emphasize`.
static UNDERSCORE_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[^A-Za-z0-9])_([^_]+?)_").unwrap());

/// Escape the three characters that would otherwise be read as markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Apply inline formatting to `text` and return escaped markup.
pub fn format_inline(text: &str, styles: &Styles) -> String {
    let (protected, spans) = protect_code_spans(text);
    let formatted = emphasize(&escape_html(&protected));
    let code_open = open_tag("code", &styles.inline_code);
    restore_code_spans(&formatted, &spans, |code| {
        format!("{code_open}{}</code>", escape_html(code))
    })
}

/// Replace each code span with a numbered placeholder.
///
/// Returns the protected text and the raw span contents in order.
pub(crate) fn protect_code_spans(text: &str) -> (String, Vec<String>) {
    let text = text.replace(SENTINEL, "\u{FFFD}");
    let mut spans = Vec::new();
    let protected = CODE_SPAN_RE
        .replace_all(&text, |caps: &Captures| {
            spans.push(caps[1].to_string());
            format!("{SENTINEL}{}{SENTINEL}", spans.len() - 1)
        })
        .into_owned();
    (protected, spans)
}

/// Put code spans back, passing each raw content through `render`.
pub(crate) fn restore_code_spans(
    text: &str,
    spans: &[String],
    render: impl Fn(&str) -> String,
) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| spans.get(n))
                .map_or_else(|| caps[0].to_string(), |code| render(code.as_str()))
        })
        .into_owned()
}

/// Emphasis passes in precedence order. Input must already be escaped.
///
/// A match whose inner text holds an unbalanced tag from an earlier pass is
/// left as written, so the output always nests properly.
fn emphasize(text: &str) -> String {
    if !text.contains(['*', '_']) {
        return text.to_string();
    }
    let text = wrap_balanced(&BOLD_ITALIC_RE, text, "<strong><em>", "</em></strong>");
    let text = wrap_balanced(&BOLD_RE, &text, "<strong>", "</strong>");
    let text = wrap_balanced(&ITALIC_RE, &text, "<em>", "</em>");

    UNDERSCORE_ITALIC_RE
        .replace_all(&text, |caps: &Captures| {
            let end = caps.get(0).map_or(text.len(), |m| m.end());
            let closes_inside_word = text[end..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphanumeric());
            if closes_inside_word || !is_balanced(&caps[2]) {
                caps[0].to_string()
            } else {
                format!("{}<em>{}</em>", &caps[1], &caps[2])
            }
        })
        .into_owned()
}

fn wrap_balanced(re: &Regex, text: &str, open: &str, close: &str) -> String {
    re.replace_all(text, |caps: &Captures| {
        if is_balanced(&caps[1]) {
            format!("{open}{}{close}", &caps[1])
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

fn is_balanced(inner: &str) -> bool {
    ["strong", "em"].iter().all(|tag| {
        inner.matches(&format!("<{tag}>")).count() == inner.matches(&format!("</{tag}>")).count()
    })
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
