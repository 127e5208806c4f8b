//! Small text helpers shared by the renderers.

use std::borrow::Cow;

use memchr::memmem;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::{Error, Result};

/// Characters that must not appear raw in an `href`/`src` attribute.
///
/// Non-ASCII bytes are always encoded; `/` is kept so relative paths survive.
const HREF: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Escape text content or attribute values for XML output.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

/// Encode a relative path for use as a link target.
pub fn encode_href(path: &str) -> String {
    utf8_percent_encode(path, HREF).to_string()
}

/// Final component of a virtual path (`Text/a.xhtml` -> `a.xhtml`).
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether raw markup contains inline SVG.
pub fn contains_svg(data: &[u8]) -> bool {
    memmem::find(data, b"<svg").is_some()
}

/// Check that caller-supplied bytes decode as UTF-8 (a leading BOM is
/// accepted). `path` is only used for error context.
pub fn require_utf8(path: &str, data: &[u8]) -> Result<()> {
    let (_, _, malformed) = encoding_rs::UTF_8.decode(data);
    if malformed {
        return Err(Error::malformed(path, "content is not valid UTF-8 text"));
    }
    Ok(())
}
