//! The package descriptor (`content.opf`): metadata, manifest and spine.

use uuid::Uuid;

use super::MediaType;
use super::id::{NCX_ID, manifest_id};
use crate::error::{Error, Result};
use crate::model::{FileSet, Metadata, Toc, TocEntry, VirtualFile};
use crate::util::{contains_svg, encode_href, escape_xml};

/// Path of the package descriptor, relative to the package root.
pub const OPF_PATH: &str = "content.opf";

/// Render the package descriptor over the final file set and TOC.
///
/// Every file gets a manifest item, in file-set order. Every TOC entry gets a
/// spine `itemref`, in TOC order, and must name a file in the set. Only the
/// generated navigation page (`nav`) is declared with the `nav` property.
pub fn render_package_document(
    metadata: &Metadata,
    identifier: &Uuid,
    cover: Option<&str>,
    nav: Option<&str>,
    files: &FileSet,
    toc: &Toc,
) -> Result<String> {
    let mut opf = String::new();

    opf.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0" unique-identifier="BookId">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
"#,
    );
    push_metadata(&mut opf, metadata, identifier, cover);
    opf.push_str("  </metadata>\n");

    opf.push_str("  <manifest>\n");
    for file in files {
        push_item(&mut opf, file, cover, nav)?;
    }
    opf.push_str("  </manifest>\n");

    if metadata.vertical {
        opf.push_str(&format!(
            "  <spine toc=\"{}\" page-progression-direction=\"rtl\">\n",
            NCX_ID
        ));
    } else {
        opf.push_str(&format!("  <spine toc=\"{}\">\n", NCX_ID));
    }
    for entry in toc {
        let path = match entry {
            TocEntry::PendingAutoNav { label } => {
                return Err(Error::UnresolvedAutoNavigation {
                    label: label.clone(),
                });
            }
            TocEntry::Visible { path, .. } | TocEntry::Hidden { path } => path,
        };
        if !files.contains(path) {
            return Err(Error::UnresolvedTocPath { path: path.clone() });
        }
        opf.push_str(&format!(
            "    <itemref idref=\"{}\"/>\n",
            escape_xml(&manifest_id(path))
        ));
    }
    opf.push_str("  </spine>\n</package>\n");

    Ok(opf)
}

fn push_metadata(opf: &mut String, metadata: &Metadata, identifier: &Uuid, cover: Option<&str>) {
    let date = metadata.date_string();

    opf.push_str(&format!(
        "    <dc:title>{}</dc:title>\n",
        escape_xml(&metadata.title)
    ));
    opf.push_str(
        "    <meta property=\"role\" refines=\"#author\" scheme=\"marc:relators\">aut</meta>\n",
    );
    opf.push_str(&format!(
        "    <dc:creator id=\"author\">{}</dc:creator>\n",
        escape_xml(&metadata.author)
    ));
    opf.push_str(&format!("    <dc:date>{}</dc:date>\n", date));
    opf.push_str(&format!(
        "    <meta property=\"dcterms:modified\">{}</meta>\n",
        date
    ));
    opf.push_str(&format!(
        "    <dc:identifier id=\"BookId\">{}</dc:identifier>\n",
        identifier.urn()
    ));
    opf.push_str(&format!(
        "    <dc:language>{}</dc:language>\n",
        escape_xml(&metadata.language)
    ));
    opf.push_str(&format!(
        "    <dc:publisher>{}</dc:publisher>\n",
        escape_xml(&metadata.publisher)
    ));
    opf.push_str(&format!(
        "    <dc:source>{}</dc:source>\n",
        escape_xml(&metadata.source)
    ));
    opf.push_str(&format!(
        "    <dc:identifier id=\"source-id\">url:{}</dc:identifier>\n",
        escape_xml(&metadata.source)
    ));
    if let Some(cover) = cover {
        opf.push_str(&format!(
            "    <meta name=\"cover\" content=\"{}\"/>\n",
            escape_xml(&manifest_id(cover))
        ));
    }
}

fn push_item(
    opf: &mut String,
    file: &VirtualFile,
    cover: Option<&str>,
    nav: Option<&str>,
) -> Result<()> {
    let media_type = file.media_type()?;
    let properties = item_properties(file, media_type, cover, nav);

    opf.push_str(&format!(
        "    <item id=\"{}\" href=\"{}\" media-type=\"{}\"",
        escape_xml(&manifest_id(&file.path)),
        encode_href(&file.path),
        media_type
    ));
    if !properties.is_empty() {
        opf.push_str(&format!(" properties=\"{}\"", properties.join(" ")));
    }
    opf.push_str("/>\n");
    Ok(())
}

/// Manifest `properties` for a file.
fn item_properties(
    file: &VirtualFile,
    media_type: MediaType,
    cover: Option<&str>,
    nav: Option<&str>,
) -> Vec<&'static str> {
    let mut properties = Vec::new();
    if nav == Some(file.path.as_str()) {
        properties.push("nav");
    }
    if cover == Some(file.path.as_str()) {
        properties.push("cover-image");
    }
    if media_type.is_markup() && contains_svg(&file.data) {
        properties.push("svg");
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epub::NAV_PATH;
    use chrono::{FixedOffset, TimeZone};

    fn metadata() -> Metadata {
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        Metadata::new("Title")
            .with_author("Author")
            .with_publisher("Publisher")
            .with_source("https://example.com/n1234/")
            .with_language("ja")
            .with_published(jst.with_ymd_and_hms(2020, 5, 17, 21, 0, 0).unwrap())
    }

    fn files_and_toc() -> (FileSet, Toc) {
        let mut files = FileSet::new();
        let mut toc = Toc::new();
        files
            .insert_new("Text/Chapter1.xhtml", b"<p>one</p>".to_vec())
            .unwrap();
        toc.push(TocEntry::visible("One", "Text/Chapter1.xhtml")).unwrap();
        files.insert_new("toc.ncx", b"<ncx/>".to_vec()).unwrap();
        (files, toc)
    }

    #[test]
    fn test_metadata_block() {
        let (files, toc) = files_and_toc();
        let id = Uuid::new_v4();
        let opf = render_package_document(&metadata(), &id, None, None, &files, &toc).unwrap();

        assert!(opf.contains("<dc:title>Title</dc:title>"));
        assert!(opf.contains("refines=\"#author\" scheme=\"marc:relators\">aut</meta>"));
        assert!(opf.contains("<dc:creator id=\"author\">Author</dc:creator>"));
        assert!(opf.contains("<dc:date>2020-05-17T15:00:00Z</dc:date>"));
        assert!(opf.contains(
            "<meta property=\"dcterms:modified\">2020-05-17T15:00:00Z</meta>"
        ));
        assert!(opf.contains(&format!(
            "<dc:identifier id=\"BookId\">urn:uuid:{}</dc:identifier>",
            id
        )));
        assert!(opf.contains("<dc:language>ja</dc:language>"));
        assert!(opf.contains("<dc:publisher>Publisher</dc:publisher>"));
        assert!(opf.contains("<dc:source>https://example.com/n1234/</dc:source>"));
        assert!(opf.contains(
            "<dc:identifier id=\"source-id\">url:https://example.com/n1234/</dc:identifier>"
        ));
        assert!(!opf.contains("name=\"cover\""));
    }

    #[test]
    fn test_manifest_and_spine() {
        let (files, toc) = files_and_toc();
        let opf = render_package_document(&metadata(), &Uuid::new_v4(), None, None, &files, &toc).unwrap();

        assert!(opf.contains(
            "<item id=\"Text_Chapter1_xhtml\" href=\"Text/Chapter1.xhtml\" media-type=\"application/xhtml+xml\"/>"
        ));
        assert!(opf.contains(
            "<item id=\"ncx\" href=\"toc.ncx\" media-type=\"application/x-dtbncx+xml\"/>"
        ));
        assert!(opf.contains("<spine toc=\"ncx\">\n    <itemref idref=\"Text_Chapter1_xhtml\"/>\n  </spine>"));
    }

    #[test]
    fn test_vertical_spine_is_rtl() {
        let (files, toc) = files_and_toc();
        let meta = metadata().with_vertical(true);
        let opf = render_package_document(&meta, &Uuid::new_v4(), None, None, &files, &toc).unwrap();
        assert!(opf.contains("<spine toc=\"ncx\" page-progression-direction=\"rtl\">"));
    }

    #[test]
    fn test_item_properties() {
        let (mut files, mut toc) = files_and_toc();
        files.insert_new(NAV_PATH, b"<nav/>".to_vec()).unwrap();
        files.insert_new("Images/cover.png", vec![0x89]).unwrap();
        files
            .insert_new("Text/cover.xhtml", b"<div><svg/></div>".to_vec())
            .unwrap();
        // raw SVG images are not content documents
        files.insert_new("Images/map.svg", b"<svg/>".to_vec()).unwrap();
        toc.push(TocEntry::visible("Contents", NAV_PATH)).unwrap();

        let opf = render_package_document(
            &metadata(),
            &Uuid::new_v4(),
            Some("Images/cover.png"),
            Some(NAV_PATH),
            &files,
            &toc,
        )
        .unwrap();

        assert!(opf.contains("href=\"Text/toc.xhtml\" media-type=\"application/xhtml+xml\" properties=\"nav\"/>"));
        assert!(opf.contains("href=\"Images/cover.png\" media-type=\"image/png\" properties=\"cover-image\"/>"));
        assert!(opf.contains("href=\"Text/cover.xhtml\" media-type=\"application/xhtml+xml\" properties=\"svg\"/>"));
        assert!(opf.contains("href=\"Images/map.svg\" media-type=\"image/svg+xml\"/>"));
        assert!(opf.contains("<meta name=\"cover\" content=\"Images_cover_png\"/>"));
    }

    #[test]
    fn test_nav_property_needs_generated_page() {
        let (mut files, toc) = files_and_toc();
        files
            .insert_new(NAV_PATH, b"<p>My list of tables</p>".to_vec())
            .unwrap();
        let opf = render_package_document(&metadata(), &Uuid::new_v4(), None, None, &files, &toc)
            .unwrap();
        assert!(opf.contains("href=\"Text/toc.xhtml\" media-type=\"application/xhtml+xml\"/>"));
        assert!(!opf.contains("properties=\"nav\""));
    }

    #[test]
    fn test_missing_spine_file() {
        let (files, mut toc) = files_and_toc();
        toc.push(TocEntry::hidden("Text/missing.xhtml")).unwrap();
        let err = render_package_document(&metadata(), &Uuid::new_v4(), None, None, &files, &toc)
            .unwrap_err();
        assert!(matches!(err, Error::UnresolvedTocPath { ref path } if path == "Text/missing.xhtml"));
    }

    #[test]
    fn test_unknown_media_type_is_fatal() {
        let (mut files, toc) = files_and_toc();
        files.insert_new("Misc/notes.txt", b"x".to_vec()).unwrap();
        let err = render_package_document(&metadata(), &Uuid::new_v4(), None, None, &files, &toc)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownMediaType { ref path } if path == "Misc/notes.txt"));
    }

    #[test]
    fn test_pending_placeholder_is_rejected() {
        let (files, mut toc) = files_and_toc();
        toc.push(TocEntry::PendingAutoNav {
            label: "Contents".into(),
        })
        .unwrap();
        let err = render_package_document(&metadata(), &Uuid::new_v4(), None, None, &files, &toc)
            .unwrap_err();
        assert!(matches!(err, Error::UnresolvedAutoNavigation { .. }));
    }
}
