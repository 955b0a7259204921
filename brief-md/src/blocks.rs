//! Line detectors for the block-level grammar.
//!
//! Each block type has its own predicate so the renderer's dispatch reads as a
//! table: blank, table row, unordered item, ordered item, otherwise paragraph
//! text. Fence lines are checked by the renderer before classification since
//! they switch it in and out of verbatim mode.

use std::sync::LazyLock;

use regex::Regex;

static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[*+-]\s+(.*)$").unwrap());
static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").unwrap());
static TABLE_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|?\s*:?-+:?\s*(\|\s*:?-+:?\s*)*\|?$").unwrap());

/// Classification of a single line outside a code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// Candidate table row. Only a table once the next line is a separator.
    TableRow,
    UnorderedItem(&'a str),
    OrderedItem(&'a str),
    Text(&'a str),
}

/// Classify `line` in dispatch order.
pub fn classify(line: &str) -> LineKind<'_> {
    if is_blank(line) {
        LineKind::Blank
    } else if is_table_row(line) {
        LineKind::TableRow
    } else if let Some(content) = unordered_item(line) {
        LineKind::UnorderedItem(content)
    } else if let Some(content) = ordered_item(line) {
        LineKind::OrderedItem(content)
    } else {
        LineKind::Text(line.trim())
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// If `line` is a code fence, return its (possibly empty) info string.
pub fn fence_info(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix("```")
        .map(|rest| rest.trim_start_matches('`').trim())
}

/// A row starts and ends with a pipe once trimmed.
pub fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Header/body separator such as `|:--|---:|` or `--- | ---`.
pub fn is_table_separator(line: &str) -> bool {
    TABLE_SEPARATOR_RE.is_match(line.trim())
}

/// Cell texts of a pipe-delimited row, trimmed, outer pipes dropped.
pub fn split_table_row(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

/// Content of a `*`, `+` or `-` bullet line.
pub fn unordered_item(line: &str) -> Option<&str> {
    UNORDERED_ITEM_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Content of a `12. item` line.
pub fn ordered_item(line: &str) -> Option<&str> {
    ORDERED_ITEM_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}
