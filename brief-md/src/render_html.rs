//! HTML fragment renderer for AI answers.
//!
//! A single line-by-line pass with a small amount of state: which list type
//! is open, whether a code fence is being captured, and the lines of the
//! paragraph being built. Any input renders; unterminated fences and lists
//! are closed at end of input.

use crate::blocks::{self, LineKind};
use crate::inline::{escape_html, format_inline};
use crate::styles::{Styles, open_tag};

/// Render `text` with the default [`Styles`].
pub fn render(text: &str) -> String {
    Renderer::default().render(text)
}

/// Markdown-subset renderer with a fixed set of element styles.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    styles: Styles,
}

impl Renderer {
    pub fn new(styles: Styles) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    /// Render `text` as an HTML fragment. Never panics.
    pub fn render(&self, text: &str) -> String {
        let normalised = text.replace("\r\n", "\n");
        let lines: Vec<&str> = normalised.split('\n').collect();
        let mut state = RenderState::new(&self.styles);

        let mut idx = 0;
        while idx < lines.len() {
            let line = lines[idx];

            if let Some(info) = blocks::fence_info(line) {
                state.toggle_fence(info);
                idx += 1;
                continue;
            }
            if let CodeBlockContext::InCodeBlock { lines: code, .. } = &mut state.code {
                code.push(line);
                idx += 1;
                continue;
            }

            match blocks::classify(line) {
                LineKind::Blank => {
                    state.flush_paragraph();
                    state.close_list();
                }
                LineKind::TableRow
                    if lines
                        .get(idx + 1)
                        .is_some_and(|next| blocks::is_table_separator(next)) =>
                {
                    let body_start = idx + 2;
                    let body_end = lines[body_start..]
                        .iter()
                        .position(|l| !blocks::is_table_row(l))
                        .map_or(lines.len(), |n| body_start + n);
                    state.push_table(line, &lines[body_start..body_end]);
                    idx = body_end;
                    continue;
                }
                LineKind::TableRow => state.push_text(line.trim()),
                LineKind::Text(text) => state.push_text(text),
                LineKind::UnorderedItem(content) => {
                    state.push_item(ListContext::Unordered, content);
                }
                LineKind::OrderedItem(content) => {
                    state.push_item(ListContext::Ordered, content);
                }
            }
            idx += 1;
        }

        state.finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListContext {
    None,
    Unordered,
    Ordered,
}

#[derive(Debug)]
enum CodeBlockContext<'a> {
    NotInCodeBlock,
    InCodeBlock { info: &'a str, lines: Vec<&'a str> },
}

/// Parser state for one `render` call.
struct RenderState<'a> {
    styles: &'a Styles,
    parts: Vec<String>,
    list: ListContext,
    code: CodeBlockContext<'a>,
    paragraph: Vec<&'a str>,
}

impl<'a> RenderState<'a> {
    fn new(styles: &'a Styles) -> Self {
        Self {
            styles,
            parts: Vec::new(),
            list: ListContext::None,
            code: CodeBlockContext::NotInCodeBlock,
            paragraph: Vec::new(),
        }
    }

    fn push_text(&mut self, text: &'a str) {
        self.close_list();
        self.paragraph.push(text);
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let joined = self.paragraph.join(" ");
        self.paragraph.clear();
        self.parts.push(format!(
            "{}{}</p>",
            open_tag("p", &self.styles.paragraph),
            format_inline(&joined, self.styles)
        ));
    }

    fn push_item(&mut self, kind: ListContext, content: &str) {
        self.flush_paragraph();
        if self.list != kind {
            self.close_list();
            let style = match kind {
                ListContext::Ordered => &self.styles.ordered_list,
                _ => &self.styles.unordered_list,
            };
            self.parts.push(open_tag(list_tag(kind), style));
            self.list = kind;
        }
        self.parts.push(format!(
            "{}{}</li>",
            open_tag("li", &self.styles.list_item),
            format_inline(content, self.styles)
        ));
    }

    fn close_list(&mut self) {
        if self.list != ListContext::None {
            self.parts.push(format!("</{}>", list_tag(self.list)));
            self.list = ListContext::None;
        }
    }

    fn toggle_fence(&mut self, info: &'a str) {
        if matches!(self.code, CodeBlockContext::InCodeBlock { .. }) {
            self.flush_code_block();
            return;
        }
        self.flush_paragraph();
        self.close_list();
        self.code = CodeBlockContext::InCodeBlock {
            info,
            lines: Vec::new(),
        };
    }

    fn flush_code_block(&mut self) {
        let CodeBlockContext::InCodeBlock { info, mut lines } =
            std::mem::replace(&mut self.code, CodeBlockContext::NotInCodeBlock)
        else {
            return;
        };
        while lines.last().is_some_and(|l| blocks::is_blank(l)) {
            lines.pop();
        }

        let code_open = if info.is_empty() {
            "<code>".to_string()
        } else {
            // Only the first word of the info string names the language.
            let lang = info.split_whitespace().next().unwrap_or(info);
            format!(
                "<code class=\"language-{}\">",
                escape_html(lang).replace('"', "&quot;")
            )
        };
        self.parts.push(format!(
            "{}{code_open}{}</code></pre>",
            open_tag("pre", &self.styles.code_block),
            escape_html(&lines.join("\n"))
        ));
    }

    fn push_table(&mut self, header: &str, rows: &[&str]) {
        self.flush_paragraph();
        self.close_list();

        let header_cells = blocks::split_table_row(header);
        let columns = header_cells.len();
        let th = open_tag("th", &self.styles.header_cell);
        let td = open_tag("td", &self.styles.data_cell);

        let head: String = header_cells
            .iter()
            .map(|cell| format!("{th}{}</th>", format_inline(cell, self.styles)))
            .collect();

        let mut table = format!(
            "{}\n<thead><tr>{head}</tr></thead>",
            open_tag("table", &self.styles.table)
        );

        if !rows.is_empty() {
            table.push_str("\n<tbody>");
            for row in rows {
                let mut cells = blocks::split_table_row(row);
                if cells.len() < columns {
                    cells.resize(columns, "");
                }
                let body: String = cells
                    .iter()
                    .map(|cell| format!("{td}{}</td>", format_inline(cell, self.styles)))
                    .collect();
                table.push_str(&format!("\n<tr>{body}</tr>"));
            }
            table.push_str("\n</tbody>");
        }
        table.push_str("\n</table>");
        self.parts.push(table);
    }

    fn finish(mut self) -> String {
        self.flush_paragraph();
        self.close_list();
        self.flush_code_block();
        self.parts.join("\n")
    }
}

fn list_tag(kind: ListContext) -> &'static str {
    match kind {
        ListContext::Ordered => "ol",
        _ => "ul",
    }
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bare(text: &str) -> String {
        Renderer::new(Styles::unstyled()).render(text)
    }

    #[test]
    fn empty_and_whitespace_render_nothing() {
        assert_eq!(bare(""), "");
        assert_eq!(bare("  \n\t\n   "), "");
    }

    #[test]
    fn court_order_summary() {
        let input = concat!(
            "**Document Type:** Court Order\n",
            "\n",
            "* Exchange at **6:00 PM**\n",
            "* Location: Main St\n",
            "\n",
            "| Date | Note |\n",
            "|:--|:--|\n",
            "| Jan 5 | Filed |\n",
        );
        let expected = concat!(
            "<p><strong>Document Type:</strong> Court Order</p>\n",
            "<ul>\n",
            "<li>Exchange at <strong>6:00 PM</strong></li>\n",
            "<li>Location: Main St</li>\n",
            "</ul>\n",
            "<table>\n",
            "<thead><tr><th>Date</th><th>Note</th></tr></thead>\n",
            "<tbody>\n",
            "<tr><td>Jan 5</td><td>Filed</td></tr>\n",
            "</tbody>\n",
            "</table>",
        );
        assert_eq!(bare(input), expected);
    }

    #[test]
    fn soft_wrapped_lines_join_into_one_paragraph() {
        assert_eq!(bare("first line\n  second line  "), "<p>first line second line</p>");
    }

    #[test]
    fn blank_line_splits_paragraphs() {
        assert_eq!(bare("one\n\ntwo"), "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn consecutive_items_share_one_list() {
        assert_eq!(
            bare("- a\n* b\n+ c"),
            "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>"
        );
    }

    #[test]
    fn list_type_switch_closes_previous_list() {
        assert_eq!(
            bare("- a\n1. b\n2. c\n- d"),
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n<li>c</li>\n</ol>\n<ul>\n<li>d</li>\n</ul>"
        );
    }

    #[test]
    fn text_line_terminates_list() {
        assert_eq!(
            bare("- a\nafter"),
            "<ul>\n<li>a</li>\n</ul>\n<p>after</p>"
        );
    }

    #[test]
    fn list_item_flushes_pending_paragraph() {
        assert_eq!(
            bare("Steps:\n1. File"),
            "<p>Steps:</p>\n<ol>\n<li>File</li>\n</ol>"
        );
    }

    #[test]
    fn unterminated_list_is_closed() {
        assert_eq!(bare("1. only"), "<ol>\n<li>only</li>\n</ol>");
    }

    #[test]
    fn code_block_is_verbatim_and_escaped() {
        let input = "```\n**not bold** <div> & - item\n```";
        assert_eq!(
            bare(input),
            "<pre><code>**not bold** &lt;div&gt; &amp; - item</code></pre>"
        );
    }

    #[test]
    fn code_block_keeps_language_class() {
        assert_eq!(
            bare("```json\n{}\n```"),
            "<pre><code class=\"language-json\">{}</code></pre>"
        );
    }

    #[test]
    fn four_backtick_fence_has_clean_class() {
        assert_eq!(bare("````\nplain\n````"), "<pre><code>plain</code></pre>");
        assert_eq!(
            bare("````rust\nfn main() {}\n````"),
            "<pre><code class=\"language-rust\">fn main() {}</code></pre>"
        );
    }

    #[test]
    fn emphasis_wraps_inline_code() {
        assert_eq!(
            bare("**File `Form 4` today**"),
            "<p><strong>File <code>Form 4</code> today</strong></p>"
        );
    }

    #[test]
    fn code_block_trims_trailing_blank_lines_only() {
        assert_eq!(
            bare("```\n  indented\n\n\n```"),
            "<pre><code>  indented</code></pre>"
        );
    }

    #[test]
    fn unterminated_fence_keeps_every_line() {
        assert_eq!(
            bare("intro\n```\nline one\n\nline three\n"),
            "<p>intro</p>\n<pre><code>line one\n\nline three</code></pre>"
        );
    }

    #[test]
    fn fence_closes_open_list() {
        assert_eq!(
            bare("- a\n```\nx\n```\n- b"),
            "<ul>\n<li>a</li>\n</ul>\n<pre><code>x</code></pre>\n<ul>\n<li>b</li>\n</ul>"
        );
    }

    #[test]
    fn short_row_is_padded_to_header_width() {
        let html = bare("| A | B | C |\n|---|---|---|\n| 1 |");
        assert!(
            html.contains("<tr><td>1</td><td></td><td></td></tr>"),
            "got: {html}"
        );
    }

    #[test]
    fn long_row_keeps_extra_cells() {
        let html = bare("| A |\n|---|\n| 1 | 2 |");
        assert!(html.contains("<tr><td>1</td><td>2</td></tr>"), "got: {html}");
    }

    #[test]
    fn header_without_separator_is_paragraph_text() {
        assert_eq!(
            bare("| A | B |\n| 1 | 2 |"),
            "<p>| A | B | | 1 | 2 |</p>"
        );
    }

    #[test]
    fn table_stops_at_first_non_row_line() {
        let html = bare("| A |\n|---|\n| 1 |\nAfter the table\n| 2 |");
        assert_eq!(
            html,
            concat!(
                "<table>\n<thead><tr><th>A</th></tr></thead>\n<tbody>\n<tr><td>1</td></tr>\n</tbody>\n</table>\n",
                "<p>After the table | 2 |</p>"
            )
        );
    }

    #[test]
    fn header_only_table() {
        assert_eq!(
            bare("|A|\n|-|"),
            "<table>\n<thead><tr><th>A</th></tr></thead>\n</table>"
        );
    }

    #[test]
    fn table_cells_get_inline_formatting() {
        let html = bare("| **Bold** | `a<b` |\n|--|--|");
        assert!(html.contains("<th><strong>Bold</strong></th>"), "got: {html}");
        assert!(html.contains("<th><code>a&lt;b</code></th>"), "got: {html}");
    }

    #[test]
    fn crlf_input() {
        assert_eq!(bare("one\r\n\r\ntwo\r\n"), "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn default_styles_are_inlined() {
        let html = render("hello\n\n```\nx\n```");
        assert!(html.starts_with("<p style=\""), "got: {html}");
        assert!(html.contains("<pre style=\"font-family: ui-monospace"), "got: {html}");
    }

    #[test]
    fn error_message_renders_as_text() {
        assert_eq!(
            bare("Error: the service is unavailable <503>"),
            "<p>Error: the service is unavailable &lt;503&gt;</p>"
        );
    }
}
