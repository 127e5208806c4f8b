//! XHTML content pages.

use crate::util::escape_xml;

/// Directory holding content documents, relative to the package root.
pub const TEXT_DIR: &str = "Text";

/// The shared stylesheet every generated page links to.
pub const STYLESHEET_PATH: &str = "Styles/stylesheet.css";

/// [`STYLESHEET_PATH`] as seen from a page in [`TEXT_DIR`].
pub const STYLESHEET_HREF: &str = "../Styles/stylesheet.css";

/// Render a content page. `body` is inserted verbatim after the heading and
/// must already be well-formed XHTML.
pub fn render_page(language: &str, title: &str, body: &str) -> String {
    let title = escape_xml(title);
    let mut html = String::with_capacity(body.len() + 512);

    push_head(&mut html, language, &title, false);
    html.push_str("<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", title));
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

/// Shared prologue for generated pages, up to and including `</head>`.
/// `title` must already be escaped.
pub(crate) fn push_head(html: &mut String, language: &str, title: &str, ops_namespace: bool) {
    html.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE html>\n");
    html.push_str(&format!(
        "<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"{}\"",
        escape_xml(language)
    ));
    if ops_namespace {
        html.push_str(" xmlns:epub=\"http://www.idpf.org/2007/ops\"");
    }
    html.push_str(">\n<head>\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str(&format!(
        "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\" />\n",
        STYLESHEET_HREF
    ));
    html.push_str("</head>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page() {
        let html = render_page("ja", "Chapter 1", "<p>Hi</p>\n");
        assert!(html.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE html>\n"));
        assert!(html.contains("xml:lang=\"ja\""));
        assert!(html.contains("<title>Chapter 1</title>"));
        assert!(html.contains("<h1>Chapter 1</h1>\n<p>Hi</p>\n</body>"));
        assert_eq!(html.matches("<h1>").count(), 1);
        assert_eq!(html.matches(STYLESHEET_HREF).count(), 1);
        assert!(!html.contains("xmlns:epub"));
    }

    #[test]
    fn test_title_is_escaped_but_body_is_not() {
        let html = render_page("en", "Q&A", "<p>a &amp; b</p>");
        assert!(html.contains("<h1>Q&amp;A</h1>"));
        assert!(html.contains("<p>a &amp; b</p>"));
    }
}
