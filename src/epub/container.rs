//! `META-INF/container.xml`.

/// Archive path of the container descriptor.
pub const CONTAINER_PATH: &str = "META-INF/container.xml";

/// Points reading systems at `OEBPS/content.opf`.
pub const CONTAINER_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#;
