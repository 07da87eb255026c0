//! SVG to bitmap conversion for the PNG and WebP outputs.

use std::io::Cursor;

use crate::foundation::error::{SponsorboardError, SponsorboardResult};

// Larger documents are almost certainly bad input.
const MAX_DIM: u32 = 16_384;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    WebP,
}

impl RasterFormat {
    fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::WebP => image::ImageFormat::WebP,
        }
    }
}

/// Straight-alpha RGBA8 pixels of a rasterized SVG.
#[derive(Clone, Debug)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Parse and rasterize `svg` at its intrinsic size.
pub fn rasterize_svg(svg: &str) -> SponsorboardResult<Bitmap> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    let opts = usvg::Options {
        fontdb: std::sync::Arc::new(fontdb),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| SponsorboardError::render(format!("parse svg: {e}")))?;

    fn to_px(v: f32) -> SponsorboardResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(SponsorboardError::render("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }
    let width = to_px(tree.size().width())?;
    let height = to_px(tree.size().height())?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(SponsorboardError::render(format!(
            "svg raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| SponsorboardError::render("failed to allocate svg pixmap"))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; image encoders expect straight alpha.
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Ok(Bitmap {
        width,
        height,
        data,
    })
}

/// Rasterize `svg` and encode it as `format`.
#[tracing::instrument(skip(svg), fields(bytes = svg.len()))]
pub fn rasterize(svg: &str, format: RasterFormat) -> SponsorboardResult<Vec<u8>> {
    let bitmap = rasterize_svg(svg)?;
    let buffer = image::RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.data)
        .ok_or_else(|| SponsorboardError::render("pixel buffer does not match raster size"))?;

    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(buffer)
        .write_to(&mut out, format.image_format())
        .map_err(|e| SponsorboardError::render(format!("encode {format:?}: {e}")))?;
    tracing::debug!(width = bitmap.width, height = bitmap.height, "rasterized");
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../tests/unit/raster.rs"]
mod tests;
