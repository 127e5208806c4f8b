//! Navigation documents: the EPUB 3 nav page and the legacy NCX map.
//!
//! Both are rendered from the same [`Toc`], so they list the same visible
//! entries in the same order. Hidden entries appear only in the spine.

use uuid::Uuid;

use super::id::manifest_id;
use super::page::push_head;
use crate::model::{Metadata, Toc};
use crate::util::{encode_href, escape_xml, file_name};

/// Where the generated navigation page lives.
pub const NAV_PATH: &str = "Text/toc.xhtml";

/// Render the navigation page listing every visible entry.
///
/// Links use bare file names: the nav page sits in the same directory as
/// the content pages.
pub fn render_nav_document(language: &str, label: &str, toc: &Toc) -> String {
    let label = escape_xml(label);
    let mut html = String::new();

    push_head(&mut html, language, &label, true);
    html.push_str("<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", label));
    html.push_str("<nav epub:type=\"toc\">\n<ol class=\"toc-list\">\n");
    for (title, path) in toc.visible() {
        html.push_str("<li class=\"toc-item\">\n");
        html.push_str(&format!(
            "<a href=\"{}\">{}</a>\n",
            encode_href(file_name(path)),
            escape_xml(title)
        ));
        html.push_str("</li>\n");
    }
    html.push_str("</ol>\n</nav>\n</body>\n</html>\n");
    html
}

/// Render `toc.ncx`. `playOrder` counts visible entries only, from 1.
pub fn render_ncx(metadata: &Metadata, identifier: &Uuid, toc: &Toc) -> String {
    let mut ncx = String::new();

    ncx.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    ncx.push_str(&format!(
        "<ncx xml:lang=\"{}\" xmlns=\"http://www.daisy.org/z3986/2005/ncx/\" version=\"2005-1\">\n",
        escape_xml(&metadata.language)
    ));
    ncx.push_str("  <head>\n");
    ncx.push_str(&format!(
        "    <meta name=\"dtb:uid\" content=\"{}\"/>\n",
        identifier.urn()
    ));
    ncx.push_str(
        r#"    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
"#,
    );
    ncx.push_str(&format!(
        "  <docTitle>\n    <text>{}</text>\n  </docTitle>\n",
        escape_xml(&metadata.title)
    ));
    ncx.push_str("  <navMap>\n");

    for (play_order, (label, path)) in (1..).zip(toc.visible()) {
        ncx.push_str(&format!(
            "    <navPoint class=\"chapter\" id=\"{}\" playOrder=\"{}\">\n",
            escape_xml(&manifest_id(path)),
            play_order
        ));
        ncx.push_str(&format!(
            "      <navLabel>\n        <text>{}</text>\n      </navLabel>\n",
            escape_xml(label)
        ));
        ncx.push_str(&format!(
            "      <content src=\"{}\"/>\n",
            encode_href(path)
        ));
        ncx.push_str("    </navPoint>\n");
    }

    ncx.push_str("  </navMap>\n</ncx>\n");
    ncx
}
