//! Manifest identifiers derived from virtual paths.

/// Path of the legacy navigation map, relative to the package root.
pub const NCX_PATH: &str = "toc.ncx";

/// Identifier reserved for the NCX. The spine's `toc` attribute refers to it
/// by this exact token.
pub const NCX_ID: &str = "ncx";

/// Derive the manifest `id` for a virtual path.
///
/// Separators and dots become underscores, so `Text/Chapter1.xhtml` maps to
/// `Text_Chapter1_xhtml`. Distinct paths that only differ in those characters
/// collide; callers must not produce such pairs.
pub fn manifest_id(path: &str) -> String {
    if path == NCX_PATH {
        return NCX_ID.to_string();
    }
    path.replace(['/', '.'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_id() {
        assert_eq!(manifest_id("Text/Chapter1.xhtml"), "Text_Chapter1_xhtml");
        assert_eq!(manifest_id("Images/cover.png"), "Images_cover_png");
        assert_eq!(manifest_id("Styles/stylesheet.css"), "Styles_stylesheet_css");
    }

    #[test]
    fn test_ncx_is_reserved() {
        assert_eq!(manifest_id(NCX_PATH), NCX_ID);
        // only the exact root path is reserved
        assert_eq!(manifest_id("Text/toc.ncx"), "Text_toc_ncx");
    }
}
