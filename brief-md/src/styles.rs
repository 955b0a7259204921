//! Inline `style` attributes attached to every element the renderer emits.
//!
//! Rendered answers are dropped straight into tool panels that do not load a
//! stylesheet, so the look travels with the markup. An empty string omits the
//! attribute entirely.

use serde::{Deserialize, Serialize};

/// Style strings for each element type produced by the HTML renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Styles {
    pub paragraph: String,
    pub unordered_list: String,
    pub ordered_list: String,
    pub list_item: String,
    pub table: String,
    pub header_cell: String,
    pub data_cell: String,
    pub inline_code: String,
    pub code_block: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            paragraph: "margin: 0 0 0.75rem 0; line-height: 1.6;".into(),
            unordered_list: "list-style-type: disc; margin: 0 0 0.75rem 1.5rem; padding: 0;"
                .into(),
            ordered_list: "list-style-type: decimal; margin: 0 0 0.75rem 1.5rem; padding: 0;"
                .into(),
            list_item: "margin: 0.25rem 0;".into(),
            table: "width: 100%; border-collapse: collapse; margin: 0 0 0.75rem 0; font-size: 0.875rem;"
                .into(),
            header_cell: "text-align: left; padding: 0.5rem; border-bottom: 2px solid #d1d5db; font-weight: 600;"
                .into(),
            data_cell: "padding: 0.5rem; border-bottom: 1px solid #e5e7eb;".into(),
            inline_code: "font-family: ui-monospace, SFMono-Regular, Menlo, monospace; font-size: 0.875em; background: #f3f4f6; padding: 0.1em 0.3em; border-radius: 4px;"
                .into(),
            code_block: "font-family: ui-monospace, SFMono-Regular, Menlo, monospace; font-size: 0.8125rem; background: #f3f4f6; padding: 0.75rem; border-radius: 6px; overflow-x: auto; white-space: pre; margin: 0 0 0.75rem 0;"
                .into(),
        }
    }
}

impl Styles {
    /// Styles that emit bare tags, for callers that bring their own CSS.
    pub fn unstyled() -> Self {
        Self {
            paragraph: String::new(),
            unordered_list: String::new(),
            ordered_list: String::new(),
            list_item: String::new(),
            table: String::new(),
            header_cell: String::new(),
            data_cell: String::new(),
            inline_code: String::new(),
            code_block: String::new(),
        }
    }
}

/// Opening tag for `tag`, with a `style` attribute unless `style` is empty.
pub(crate) fn open_tag(tag: &str, style: &str) -> String {
    if style.is_empty() {
        format!("<{tag}>")
    } else {
        format!("<{tag} style=\"{}\">", style.replace('"', "&quot;"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_tag_omits_empty_style() {
        assert_eq!(open_tag("p", ""), "<p>");
    }

    #[test]
    fn open_tag_quotes_style() {
        assert_eq!(
            open_tag("code", "font-family: \"Fira Code\""),
            "<code style=\"font-family: &quot;Fira Code&quot;\">"
        );
    }

    #[test]
    fn default_code_styles_are_monospace() {
        let styles = Styles::default();
        assert!(styles.inline_code.contains("monospace"));
        assert!(styles.code_block.contains("monospace"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let styles: Styles = serde_json::from_str(r#"{ "paragraph": "color: red;" }"#).unwrap();
        assert_eq!(styles.paragraph, "color: red;");
        assert_eq!(styles.list_item, Styles::default().list_item);
    }

    #[test]
    fn camel_case_keys() {
        let styles: Styles = serde_json::from_str(r#"{ "codeBlock": "" }"#).unwrap();
        assert_eq!(styles.code_block, "");
    }
}
