use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::foundation::error::{DeckError, DeckResult};

/// A rasterized frame as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, not premultiplied.
    pub data: Vec<u8>,
}

/// SVG rasterizer holding a font database shared across frames.
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Rasterizer {
    /// Build a rasterizer backed by the system fonts.
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Build a rasterizer with an empty font database (text is skipped).
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Parse and render an SVG document at its intrinsic size.
    pub fn rasterize(&self, svg: &str) -> DeckResult<FrameRgba> {
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

        let size = tree.size();
        let width = to_px(size.width())?;
        let height = to_px(size.height())?;

        // Keep allocations bounded for absurd scale factors.
        const MAX_DIM: u32 = 16_384;
        if width > MAX_DIM || height > MAX_DIM {
            return Err(DeckError::render(format!(
                "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
            )));
        }

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| DeckError::render("failed to allocate pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        let mut data = Vec::with_capacity(pixmap.pixels().len() * 4);
        for px in pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        Ok(FrameRgba {
            width,
            height,
            data,
        })
    }
}

fn to_px(v: f32) -> DeckResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(DeckError::render("svg has invalid width/height"));
    }
    Ok((v.ceil() as u32).max(1))
}

/// Write a frame as PNG, creating parent directories as needed.
pub fn save_png(frame: &FrameRgba, path: &Path) -> DeckResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
