//! EPUB 3 markup: media types, identifiers and the generated documents.

mod container;
mod id;
mod media_type;
mod nav;
mod opf;
mod page;
mod stylesheet;

pub use container::{CONTAINER_PATH, CONTAINER_XML};
pub use id::{NCX_ID, NCX_PATH, manifest_id};
pub use media_type::MediaType;
pub use nav::{NAV_PATH, render_nav_document, render_ncx};
pub use opf::{OPF_PATH, render_package_document};
pub use page::{STYLESHEET_HREF, STYLESHEET_PATH, TEXT_DIR, render_page};
pub use stylesheet::default_stylesheet;

/// Contents of the `mimetype` entry. Stored uncompressed, no trailing newline.
pub const MIMETYPE: &[u8] = b"application/epub+zip";

/// Directory inside the archive that holds the package.
pub const PACKAGE_ROOT: &str = "OEBPS";
