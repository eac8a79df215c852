use crate::{
    assets::store::SvgAssetCache,
    foundation::core::{Affine, CanvasSize, FrameRGBA},
    foundation::error::{FacetteError, FacetteResult},
    registry::category::PartRegistry,
    render::grid,
    state::store::PartStore,
    transform::pipeline,
};

/// Default canvas background, a light warm gray (`#f8f9fa`).
pub const BACKGROUND_RGB: [u8; 3] = [248, 249, 250];

/// Composites placed parts into a single frame.
///
/// Parts are drawn in ascending z order onto an opaque background. A part
/// whose artwork cannot be fetched or whose record is malformed is skipped
/// with a warning rather than failing the whole frame, so a stale store
/// still produces a usable image.
#[derive(Clone, Debug)]
pub struct Compositor {
    background: [u8; 3],
    show_grid: bool,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    /// Compositor with the default background and no grid overlay.
    pub fn new() -> Self {
        Self {
            background: BACKGROUND_RGB,
            show_grid: false,
        }
    }

    /// Replace the background color.
    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.background = rgb;
        self
    }

    /// Toggle the coordinate grid overlaid on top of the parts.
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    /// Compose every part in `store` onto a fresh canvas.
    #[tracing::instrument(skip_all, fields(parts = store.len(), w = canvas.width, h = canvas.height))]
    pub fn render(
        &self,
        store: &PartStore,
        registry: &PartRegistry,
        cache: &SvgAssetCache,
        canvas: CanvasSize,
    ) -> FacetteResult<FrameRGBA> {
        let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| FacetteError::validation("failed to allocate canvas pixmap"))?;

        let [r, g, b] = self.background;
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, 255));

        for (slot, part) in store.sorted_parts() {
            let Some(category) = registry.get(&part.category) else {
                tracing::warn!(slot, category = part.category, "skipping unknown category");
                continue;
            };

            let prepared = match cache.get_part(category, part) {
                Ok(prepared) => prepared,
                Err(e) => {
                    tracing::warn!(slot, error = %e, "skipping part with unusable artwork");
                    continue;
                }
            };

            let xform = pipeline::draw_transform(
                part,
                category,
                canvas,
                prepared.width,
                prepared.height,
            );
            resvg::render(&prepared.tree, skia_transform(xform), &mut pixmap.as_mut());
        }

        if self.show_grid {
            grid::draw_grid(&mut pixmap, canvas)?;
        }

        Ok(frame_from_pixmap(&pixmap, canvas))
    }
}

/// Convert a kurbo affine into tiny-skia's row-major form.
pub(crate) fn skia_transform(affine: Affine) -> resvg::tiny_skia::Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    resvg::tiny_skia::Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
}

fn frame_from_pixmap(pixmap: &resvg::tiny_skia::Pixmap, canvas: CanvasSize) -> FrameRGBA {
    let mut rgba8 = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba8.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        rgba8,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
