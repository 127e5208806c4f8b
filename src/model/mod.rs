//! In-memory document model.
//!
//! This module contains:
//! - Book metadata
//! - The ordered file set and its virtual files
//! - The table of contents / reading order
//! - The [`Document`] being built

mod document;
mod files;
mod metadata;
mod toc;

pub use document::Document;
pub use files::{FileSet, VirtualFile};
pub use metadata::Metadata;
pub use toc::{Toc, TocEntry};
