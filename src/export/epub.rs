//! EPUB packager.
//!
//! Finalizes a [`Document`] into a [`Package`] and writes it as a ZIP archive.

use std::io::{Seek, Write};
use std::path::Path;
use std::sync::atomic::Ordering;

use tempfile::NamedTempFile;
use uuid::Uuid;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::ExportConfig;
use crate::epub::{
    CONTAINER_PATH, CONTAINER_XML, MIMETYPE, NAV_PATH, NCX_PATH, OPF_PATH, PACKAGE_ROOT,
    render_nav_document, render_ncx, render_package_document,
};
use crate::error::{Error, Result};
use crate::model::{Document, FileSet, Metadata, Toc};

/// A finalized document: every file rendered, ready to be archived.
#[derive(Debug, Clone)]
pub struct Package {
    metadata: Metadata,
    identifier: Uuid,
    files: FileSet,
    toc: Toc,
    package_document: String,
}

impl Package {
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn identifier(&self) -> Uuid {
        self.identifier
    }

    /// Every manifest file, including `toc.ncx` and the navigation page.
    pub fn files(&self) -> &FileSet {
        &self.files
    }

    /// The resolved reading order.
    pub fn toc(&self) -> &Toc {
        &self.toc
    }

    /// The rendered `content.opf`.
    pub fn package_document(&self) -> &str {
        &self.package_document
    }
}

/// EPUB format exporter.
///
/// # Example
///
/// ```no_run
/// use folio::export::{EpubExporter, ExportConfig};
/// use folio::{Document, Metadata};
///
/// let mut doc = Document::new(Metadata::new("T"));
/// doc.add_page("Chapter1.xhtml", "Chapter 1", "<p>Hi</p>", true)?;
///
/// let config = ExportConfig {
///     compression_level: Some(9),
///     ..Default::default()
/// };
/// EpubExporter::new().with_config(config).export(doc, "book.epub")?;
/// # Ok::<(), folio::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct EpubExporter {
    config: ExportConfig,
}

impl EpubExporter {
    /// Create a new exporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the exporter with custom settings.
    pub fn with_config(mut self, config: ExportConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the generated documents over the final file set.
    ///
    /// Runs, in order: placeholder resolution, the navigation page (only if
    /// a placeholder was resolved) and `toc.ncx`, then `content.opf`.
    pub fn finalize(&self, mut document: Document) -> Result<Package> {
        document.resolve_auto_navigation();
        let Document {
            metadata,
            identifier,
            cover,
            mut files,
            toc,
            auto_nav,
        } = document;

        let nav = match auto_nav {
            Some(label) => {
                if toc.visible().next().is_none() {
                    tracing::warn!(label = %label, "navigation page has no visible entries");
                }
                let page = render_nav_document(&metadata.language, &label, &toc);
                tracing::debug!(path = NAV_PATH, bytes = page.len(), "rendered navigation page");
                files.insert_new(NAV_PATH, page.into_bytes())?;
                Some(NAV_PATH)
            }
            None => None,
        };

        let ncx = render_ncx(&metadata, &identifier, &toc);
        tracing::debug!(path = NCX_PATH, bytes = ncx.len(), "rendered navigation map");
        files.insert_new(NCX_PATH, ncx.into_bytes())?;

        let package_document = render_package_document(
            &metadata,
            &identifier,
            cover.as_deref(),
            nav,
            &files,
            &toc,
        )?;
        tracing::debug!(
            path = OPF_PATH,
            manifest = files.len(),
            spine = toc.len(),
            "rendered package document"
        );

        Ok(Package {
            metadata,
            identifier,
            files,
            toc,
            package_document,
        })
    }

    /// Finalize `document` and write it to `path`.
    ///
    /// The archive is written to a temporary file next to `path` and renamed
    /// into place only once complete. On any error nothing is left at `path`
    /// (an existing file there is untouched).
    pub fn export(&self, document: Document, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let package = self.finalize(document)?;

        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;
        self.write_package(&package, temp.as_file_mut())?;
        temp.as_file().sync_all()?;
        temp.persist(path)?;

        tracing::info!(
            path = %path.display(),
            title = %package.metadata.title,
            files = package.files.len(),
            "wrote EPUB"
        );
        Ok(())
    }

    /// Finalize `document` and write it to any [`Write`] + [`Seek`]
    /// destination, returning the writer.
    ///
    /// Unlike [`EpubExporter::export`], a failure part way through may leave
    /// partial output in `writer`.
    pub fn export_to_writer<W: Write + Seek>(&self, document: Document, writer: W) -> Result<W> {
        let package = self.finalize(document)?;
        self.write_package(&package, writer)
    }

    /// Write an already finalized package.
    pub fn write_package<W: Write + Seek>(&self, package: &Package, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);

        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(self.config.compression_level);

        // 1. mimetype (must be first, uncompressed)
        self.check_cancelled()?;
        zip.start_file("mimetype", stored)?;
        zip.write_all(MIMETYPE)?;

        // 2. container.xml
        self.check_cancelled()?;
        zip.start_file(CONTAINER_PATH, deflated)?;
        zip.write_all(CONTAINER_XML)?;

        // 3. content.opf
        self.check_cancelled()?;
        zip.start_file(format!("{}/{}", PACKAGE_ROOT, OPF_PATH), deflated)?;
        zip.write_all(package.package_document.as_bytes())?;

        // 4. everything in the manifest, in order
        for file in &package.files {
            self.check_cancelled()?;
            let name = format!("{}/{}", PACKAGE_ROOT, file.path);
            tracing::debug!(entry = %name, bytes = file.data.len(), "writing archive entry");
            zip.start_file(name, deflated)?;
            zip.write_all(&file.data)?;
        }

        Ok(zip.finish()?)
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.config.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }
}
