//! # folio
//!
//! Build EPUB 3 packages from an in-memory document model.
//!
//! ## Features
//!
//! - XHTML content pages with a shared stylesheet
//! - Generated navigation page and legacy NCX map, kept in the same order
//! - Package descriptor with stable manifest identifiers and spine
//! - Composed cover image with a scalable cover page
//! - Atomic archive writes with the uncompressed `mimetype` entry first
//!
//! ## Quick Start
//!
//! ```no_run
//! use folio::{Document, Metadata};
//!
//! let metadata = Metadata::new("My Book")
//!     .with_author("Author Name")
//!     .with_publisher("Self")
//!     .with_source("https://example.com/my-book/")
//!     .with_language("en");
//!
//! let mut doc = Document::new(metadata);
//! doc.set_default_stylesheet();
//! doc.add_auto_navigation("Table of Contents")?;
//! doc.add_page("Chapter00001.xhtml", "Chapter 1", "<p>It begins.</p>", true)?;
//! doc.build("my-book.epub")?;
//! # Ok::<(), folio::Error>(())
//! ```
//!
//! Fetching source text and cleaning it into well-formed XHTML fragments is
//! left to the caller; page bodies are inserted verbatim.

pub mod cover;
pub mod epub;
pub mod error;
pub mod export;
pub mod model;
pub(crate) mod util;

pub use cover::{CoverArtSource, PlaceholderArt};
pub use epub::{MediaType, manifest_id};
pub use error::{Error, Result};
pub use export::{EpubExporter, ExportConfig, Package};
pub use model::{Document, FileSet, Metadata, Toc, TocEntry, VirtualFile};
