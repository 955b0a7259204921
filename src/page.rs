//! Standalone HTML page around a rendered fragment, for previewing answers
//! outside the site.

use brief_md::escape_html;

pub fn render_page(fragment: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body style="max-width: 48rem; margin: 0 auto; padding: 2rem 1.5rem; font-family: system-ui, sans-serif; color: #1f2937;">
<article>
{fragment}
</article>
</body>
</html>"#,
        title = escape_html(title),
        fragment = fragment,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_fragment_and_escapes_title() {
        let page = render_page("<p>hi</p>", "Orders <draft>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Orders &lt;draft&gt;</title>"));
        assert!(page.contains("<article>\n<p>hi</p>\n</article>"));
    }
}
