//! Media types for files that may appear in a package manifest.

use std::fmt;

use crate::error::{Error, Result};

/// Every media type the packager knows how to declare.
///
/// The set is closed: a path whose suffix is not in [`SUFFIXES`] has no
/// media type, and [`MediaType::from_path`] reports it rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Ncx,
    Opf,
    Xhtml,
    Css,
    Jpeg,
    Png,
    Gif,
    Svg,
    Ttf,
    Otf,
}

/// Suffix table, matched case-sensitively against the end of the path.
const SUFFIXES: &[(&str, MediaType)] = &[
    (".ncx", MediaType::Ncx),
    (".opf", MediaType::Opf),
    (".xhtml", MediaType::Xhtml),
    (".html", MediaType::Xhtml),
    (".css", MediaType::Css),
    (".jpg", MediaType::Jpeg),
    (".jpeg", MediaType::Jpeg),
    (".png", MediaType::Png),
    (".gif", MediaType::Gif),
    (".svg", MediaType::Svg),
    (".ttf", MediaType::Ttf),
    (".otf", MediaType::Otf),
];

impl MediaType {
    /// Resolve the media type of a virtual path by its suffix.
    pub fn from_path(path: &str) -> Result<Self> {
        SUFFIXES
            .iter()
            .find(|(suffix, _)| path.ends_with(suffix))
            .map(|&(_, media_type)| media_type)
            .ok_or_else(|| Error::UnknownMediaType {
                path: path.to_string(),
            })
    }

    /// The MIME string written into the manifest.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Ncx => "application/x-dtbncx+xml",
            MediaType::Opf => "application/oebps-package+xml",
            MediaType::Xhtml => "application/xhtml+xml",
            MediaType::Css => "text/css",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
            MediaType::Gif => "image/gif",
            MediaType::Svg => "image/svg+xml",
            MediaType::Ttf => "application/x-font-ttf",
            MediaType::Otf => "application/x-font-opentype",
        }
    }

    /// Whether files of this type are content documents.
    pub fn is_markup(self) -> bool {
        self == MediaType::Xhtml
    }

    /// Whether files of this type are UTF-8 text rather than binary data.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            MediaType::Ncx | MediaType::Opf | MediaType::Xhtml | MediaType::Css | MediaType::Svg
        )
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
