//! Export: finalizing documents and writing EPUB archives.
//!
//! # Architecture
//!
//! The exporter uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes atomically to a path, `export_to_writer()` to any
//!   `Write + Seek` destination

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

mod epub;

pub use epub::{EpubExporter, Package};

/// Shared flag checked before every archive entry; set it to abort.
pub type CancelFlag = Arc<AtomicBool>;

/// Configuration for EPUB export.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Deflate level for compressed entries (`None` uses the zip default).
    pub compression_level: Option<i64>,
    /// Cooperative cancellation. A cancelled export returns
    /// [`Error::Cancelled`](crate::Error::Cancelled) and leaves no file behind.
    pub cancel: Option<CancelFlag>,
}

impl ExportConfig {
    /// A fresh, unset cancellation flag.
    pub fn cancel_flag() -> CancelFlag {
        Arc::new(AtomicBool::new(false))
    }
}
