//! Cover composition.
//!
//! A cover is a fixed-size PNG built from two raster fragments: artwork on
//! top and a caption strip underneath. Fetching or drawing the fragments is
//! up to the caller; [`CoverArtSource`] is the seam for that, and
//! [`PlaceholderArt`] fills it with flat colour when nothing better exists.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, imageops};

use crate::error::{Error, Result};
use crate::model::Metadata;
use crate::util::escape_xml;

/// Where the composed cover image is stored.
pub const COVER_IMAGE_PATH: &str = "Images/cover.png";

/// The page wrapping the cover image.
pub const COVER_PAGE_PATH: &str = "Text/cover.xhtml";

pub const CANVAS_WIDTH: u32 = 1875;
pub const CANVAS_HEIGHT: u32 = 2500;

/// Height of the artwork region at the top of the canvas.
pub const ARTWORK_HEIGHT: u32 = 1875;

/// Height of the caption region below the artwork.
pub const CAPTION_HEIGHT: u32 = CANVAS_HEIGHT - ARTWORK_HEIGHT;

const BACKGROUND: [u8; 3] = [61, 64, 112];

/// Supplies the two raster fragments of a cover.
pub trait CoverArtSource {
    /// Encoded image for the artwork region, ideally
    /// `CANVAS_WIDTH` x `ARTWORK_HEIGHT`.
    fn artwork(&self, metadata: &Metadata) -> Result<Vec<u8>>;

    /// Encoded image for the caption region, ideally
    /// `CANVAS_WIDTH` x `CAPTION_HEIGHT`.
    fn caption(&self, metadata: &Metadata) -> Result<Vec<u8>>;
}

/// Flat-colour fragments generated locally.
///
/// Title and author are not drawn; supply a [`CoverArtSource`] that renders
/// them when the cover should carry text.
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderArt {
    pub artwork_color: [u8; 3],
    pub caption_color: [u8; 3],
}

impl Default for PlaceholderArt {
    fn default() -> Self {
        Self {
            artwork_color: BACKGROUND,
            caption_color: [255, 255, 255],
        }
    }
}

impl CoverArtSource for PlaceholderArt {
    fn artwork(&self, _metadata: &Metadata) -> Result<Vec<u8>> {
        let img = RgbImage::from_pixel(CANVAS_WIDTH, ARTWORK_HEIGHT, Rgb(self.artwork_color));
        encode_png(&img)
    }

    fn caption(&self, _metadata: &Metadata) -> Result<Vec<u8>> {
        let img = RgbImage::from_pixel(CANVAS_WIDTH, CAPTION_HEIGHT, Rgb(self.caption_color));
        encode_png(&img)
    }
}

/// Paste both fragments onto the canvas and encode it as PNG.
///
/// Each fragment is clipped to its own region; a smaller fragment leaves the
/// background colour showing.
pub fn compose_cover(artwork: &[u8], caption: &[u8]) -> Result<Vec<u8>> {
    let artwork = decode_fragment(artwork, "artwork")?;
    let caption = decode_fragment(caption, "caption")?;

    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgb(BACKGROUND));
    paste(&mut canvas, &artwork, 0, ARTWORK_HEIGHT);
    paste(&mut canvas, &caption, ARTWORK_HEIGHT, CAPTION_HEIGHT);

    encode_png(&canvas)
}

/// The XHTML page displaying the cover, scaled to fit the screen.
pub fn render_cover_page(language: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="{lang}">
<head>
  <title>Cover</title>
</head>
<body>
  <div style="text-align: center; padding: 0pt; margin: 0pt;">
    <svg xmlns="http://www.w3.org/2000/svg" height="100%" preserveAspectRatio="xMidYMid meet" version="1.1" viewBox="0 0 {w} {h}" width="100%" xmlns:xlink="http://www.w3.org/1999/xlink">
      <image width="{w}" height="{h}" xlink:href="../{image}"/>
    </svg>
  </div>
</body>
</html>
"#,
        lang = escape_xml(language),
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
        image = COVER_IMAGE_PATH,
    )
}

fn decode_fragment(data: &[u8], region: &str) -> Result<DynamicImage> {
    image::load_from_memory(data)
        .map_err(|e| Error::malformed(COVER_IMAGE_PATH, format!("{region} fragment: {e}")))
}

fn paste(canvas: &mut RgbImage, fragment: &DynamicImage, top: u32, height: u32) {
    let clipped = fragment.crop_imm(
        0,
        0,
        fragment.width().min(CANVAS_WIDTH),
        fragment.height().min(height),
    );
    imageops::overlay(canvas, &clipped.to_rgb8(), 0, i64::from(top));
}

fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|e| Error::malformed(COVER_IMAGE_PATH, e))?;
    Ok(out)
}
