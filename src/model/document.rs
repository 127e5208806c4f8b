//! The document being assembled: metadata, files and reading order.

use std::path::Path;

use uuid::Uuid;

use super::{FileSet, Metadata, Toc, TocEntry};
use crate::cover::{self, COVER_IMAGE_PATH, COVER_PAGE_PATH, CoverArtSource};
use crate::epub::{
    MediaType, NAV_PATH, NCX_PATH, OPF_PATH, STYLESHEET_PATH, TEXT_DIR, default_stylesheet,
    render_page,
};
use crate::error::{Error, Result};
use crate::export::EpubExporter;
use crate::util::require_utf8;

/// A book under construction.
///
/// Pages, files, the stylesheet and the cover can be added in any order.
/// [`Document::build`] (or [`EpubExporter::finalize`]) consumes the document;
/// it cannot be written twice.
///
/// # Example
///
/// ```no_run
/// use folio::{Document, Metadata};
///
/// let mut doc = Document::new(Metadata::new("T").with_author("A"));
/// doc.set_default_stylesheet();
/// doc.add_auto_navigation("Contents")?;
/// doc.add_page("Chapter1.xhtml", "Chapter 1", "<p>Hi</p>", true)?;
/// doc.build("book.epub")?;
/// # Ok::<(), folio::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) metadata: Metadata,
    pub(crate) identifier: Uuid,
    pub(crate) cover: Option<String>,
    pub(crate) files: FileSet,
    pub(crate) toc: Toc,
    /// Label of the resolved auto-navigation page, once resolved.
    pub(crate) auto_nav: Option<String>,
}

impl Document {
    /// Start a new document. The persistent identifier is generated here and
    /// never changes afterwards.
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            identifier: Uuid::new_v4(),
            cover: None,
            files: FileSet::new(),
            toc: Toc::new(),
            auto_nav: None,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn identifier(&self) -> Uuid {
        self.identifier
    }

    /// Path of the cover image, if one was composed.
    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }

    pub fn toc(&self) -> &Toc {
        &self.toc
    }

    /// Render a content page into `Text/<file_name>` and append it to the
    /// reading order. Hidden pages (`visible == false`) stay out of both
    /// navigation documents.
    pub fn add_page(&mut self, file_name: &str, title: &str, body: &str, visible: bool) -> Result<()> {
        let path = format!("{}/{}", TEXT_DIR, file_name);
        if file_name.is_empty() || file_name.contains('/') {
            return Err(Error::malformed(path, "page name must be a bare file name"));
        }
        if !MediaType::from_path(&path)?.is_markup() {
            return Err(Error::malformed(path, "page name must end in .xhtml or .html"));
        }
        if path == NAV_PATH {
            return Err(Error::DuplicatePath { path });
        }

        let html = render_page(&self.metadata.language, title, body);
        self.files.insert_new(path.clone(), html.into_bytes())?;
        let entry = if visible {
            TocEntry::visible(title, path)
        } else {
            TocEntry::hidden(path)
        };
        self.toc.push(entry)
    }

    /// Reserve this position for a navigation page generated at build time.
    pub fn add_auto_navigation(&mut self, label: impl Into<String>) -> Result<()> {
        self.toc.push(TocEntry::PendingAutoNav {
            label: label.into(),
        })
    }

    /// Use `css` as the shared stylesheet, replacing any previous one.
    pub fn set_stylesheet(&mut self, css: impl Into<Vec<u8>>) -> Result<()> {
        let css = css.into();
        require_utf8(STYLESHEET_PATH, &css)?;
        self.files.upsert(STYLESHEET_PATH, css);
        Ok(())
    }

    /// Use the built-in stylesheet, vertical or horizontal per the metadata.
    pub fn set_default_stylesheet(&mut self) {
        let css = default_stylesheet(self.metadata.vertical);
        self.files.upsert(STYLESHEET_PATH, css.into_bytes());
    }

    /// Add a raw file (image, font, hand-written page) under the package
    /// root. It is listed in the manifest but not in the reading order; use
    /// [`Document::add_spine_entry`] for that.
    ///
    /// Text files (pages, stylesheets, SVG) must be valid UTF-8.
    pub fn add_file(&mut self, path: impl Into<String>, data: Vec<u8>) -> Result<()> {
        let path = path.into();
        if [NCX_PATH, OPF_PATH, NAV_PATH].contains(&path.as_str()) {
            return Err(Error::DuplicatePath { path });
        }
        if MediaType::from_path(&path)?.is_text() {
            require_utf8(&path, &data)?;
        }
        self.files.insert_new(path, data)
    }

    /// Append an existing file to the reading order, with a navigation label
    /// or hidden. The file must exist by the time the document is built.
    pub fn add_spine_entry(&mut self, path: impl Into<String>, label: Option<&str>) -> Result<()> {
        let entry = match label {
            Some(label) => TocEntry::visible(label, path),
            None => TocEntry::hidden(path),
        };
        self.toc.push(entry)
    }

    /// Compose the cover from two encoded fragments and make its page the
    /// first entry of the reading order.
    pub fn compose_cover(&mut self, artwork: &[u8], caption: &[u8]) -> Result<()> {
        for path in [COVER_IMAGE_PATH, COVER_PAGE_PATH] {
            if self.files.contains(path) {
                return Err(Error::DuplicatePath { path: path.into() });
            }
        }

        let png = cover::compose_cover(artwork, caption)?;
        tracing::debug!(bytes = png.len(), "composed cover image");
        self.files.insert_new(COVER_IMAGE_PATH, png)?;
        self.files.insert_new(
            COVER_PAGE_PATH,
            cover::render_cover_page(&self.metadata.language).into_bytes(),
        )?;
        self.toc.push_front(TocEntry::hidden(COVER_PAGE_PATH));
        self.cover = Some(COVER_IMAGE_PATH.to_string());
        Ok(())
    }

    /// Like [`Document::compose_cover`], pulling the fragments from `source`.
    pub fn compose_cover_from(&mut self, source: &dyn CoverArtSource) -> Result<()> {
        let artwork = source.artwork(&self.metadata)?;
        let caption = source.caption(&self.metadata)?;
        self.compose_cover(&artwork, &caption)
    }

    /// Turn the auto-navigation placeholder into a concrete entry.
    ///
    /// Returns `false` when there is no placeholder, including when it was
    /// already resolved; calling this again changes nothing. The page itself
    /// is rendered at build time, so pages added afterwards still show up.
    pub fn resolve_auto_navigation(&mut self) -> bool {
        match self.toc.resolve_auto_navigation() {
            Some(label) => {
                self.auto_nav = Some(label);
                true
            }
            None => false,
        }
    }

    /// Finalize and write the package to `path` with default settings.
    pub fn build(self, path: impl AsRef<Path>) -> Result<()> {
        EpubExporter::new().export(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::new(Metadata::new("T").with_language("ja"))
    }

    #[test]
    fn test_add_page() {
        let mut doc = doc();
        doc.add_page("Chapter1.xhtml", "One", "<p>Hi</p>", true).unwrap();
        doc.add_page("Afterword.xhtml", "Afterword", "<p>Bye</p>", false).unwrap();

        let page = doc.files().get("Text/Chapter1.xhtml").unwrap();
        let html = String::from_utf8(page.data.clone()).unwrap();
        assert!(html.contains("<h1>One</h1>\n<p>Hi</p>"));
        assert!(html.contains("xml:lang=\"ja\""));

        let entries: Vec<_> = doc.toc().iter().cloned().collect();
        assert_eq!(
            entries,
            [
                TocEntry::visible("One", "Text/Chapter1.xhtml"),
                TocEntry::hidden("Text/Afterword.xhtml"),
            ]
        );
    }

    #[test]
    fn test_add_page_rejects_bad_names() {
        let mut doc = doc();
        assert!(matches!(
            doc.add_page("sub/Chapter1.xhtml", "x", "", true),
            Err(Error::MalformedInput { .. })
        ));
        assert!(matches!(
            doc.add_page("Chapter1.txt", "x", "", true),
            Err(Error::UnknownMediaType { .. })
        ));
        assert!(matches!(
            doc.add_page("Chapter1.css", "x", "", true),
            Err(Error::MalformedInput { .. })
        ));
        doc.add_page("Chapter1.xhtml", "x", "", true).unwrap();
        assert!(matches!(
            doc.add_page("Chapter1.xhtml", "y", "", true),
            Err(Error::DuplicatePath { .. })
        ));
        assert_eq!(doc.toc().len(), 1);
    }

    #[test]
    fn test_stylesheet() {
        let mut doc = doc();
        doc.set_default_stylesheet();
        doc.set_stylesheet("p { margin: 0 }").unwrap();
        assert_eq!(doc.files().len(), 1);
        assert_eq!(doc.files().get(STYLESHEET_PATH).unwrap().data, b"p { margin: 0 }");

        let err = doc.set_stylesheet(vec![0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { .. }));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut doc = doc();
        doc.add_auto_navigation("Contents").unwrap();
        doc.add_page("Chapter1.xhtml", "One", "", true).unwrap();

        assert!(doc.resolve_auto_navigation());
        let files = doc.files().clone();
        let toc = doc.toc().clone();

        assert!(!doc.resolve_auto_navigation());
        assert_eq!(doc.files(), &files);
        assert_eq!(doc.toc(), &toc);
        assert_eq!(toc.iter().next().unwrap().path(), Some(NAV_PATH));
    }

    #[test]
    fn test_add_file() {
        let mut doc = doc();
        doc.add_file("Fonts/serif.otf", vec![0, 1]).unwrap();
        assert!(matches!(
            doc.add_file("Fonts/serif.woff2", vec![]),
            Err(Error::UnknownMediaType { .. })
        ));
        assert!(matches!(
            doc.add_file("toc.ncx", vec![]),
            Err(Error::DuplicatePath { .. })
        ));
        assert!(matches!(
            doc.add_file("Text/toc.xhtml", b"<p/>".to_vec()),
            Err(Error::DuplicatePath { .. })
        ));
    }

    #[test]
    fn test_add_file_rejects_binary_text() {
        let mut doc = doc();
        for path in ["Text/raw.xhtml", "Styles/extra.css", "Images/map.svg"] {
            let err = doc.add_file(path, vec![0x3c, 0x70, 0xff, 0xfe, 0x3e]).unwrap_err();
            assert!(matches!(err, Error::MalformedInput { path: ref p, .. } if p == path));
        }
        assert!(doc.files().is_empty());

        // binary formats are taken as they are
        doc.add_file("Images/photo.jpg", vec![0xff, 0xd8, 0xff, 0xe0]).unwrap();
        doc.add_file("Text/raw.xhtml", "<p>ok</p>".into()).unwrap();
        assert_eq!(doc.files().len(), 2);
    }

    #[test]
    fn test_nav_path_is_reserved() {
        let mut doc = doc();
        assert!(matches!(
            doc.add_page("toc.xhtml", "My list of tables", "<p>tables</p>", true),
            Err(Error::DuplicatePath { ref path }) if path == NAV_PATH
        ));
        assert!(doc.files().is_empty());
        assert!(doc.toc().is_empty());

        // the position stays free for the generated page
        doc.add_auto_navigation("Contents").unwrap();
        assert!(doc.resolve_auto_navigation());
    }

    #[test]
    fn test_cover_goes_first() {
        let mut doc = doc();
        doc.add_page("Chapter1.xhtml", "One", "", true).unwrap();
        doc.compose_cover_from(&cover::PlaceholderArt::default()).unwrap();

        assert_eq!(doc.cover(), Some(COVER_IMAGE_PATH));
        assert_eq!(doc.toc().iter().next(), Some(&TocEntry::hidden(COVER_PAGE_PATH)));
        assert!(doc.files().contains(COVER_IMAGE_PATH));

        let err = doc.compose_cover_from(&cover::PlaceholderArt::default()).unwrap_err();
        assert!(matches!(err, Error::DuplicatePath { .. }));
        assert_eq!(doc.toc().len(), 2);
    }

    #[test]
    fn test_identifier_is_stable() {
        let mut doc = doc();
        let id = doc.identifier();
        doc.add_page("Chapter1.xhtml", "One", "", true).unwrap();
        doc.set_default_stylesheet();
        assert_eq!(doc.identifier(), id);
        assert_ne!(Document::new(Metadata::new("T")).identifier(), id);
    }
}
