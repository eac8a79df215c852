//! The deterministic part-transform pipeline.
//!
//! Rendering and coordinate export both go through the functions here, so the
//! arithmetic cannot drift between the two call sites. The canonical order,
//! anchored at canvas center:
//!
//! 1. translate by the category anchor offset
//! 2. translate by the symmetry gap (`±(default + adjustment)`) and the user
//!    `(x, y)` offset
//! 3. rotate by the part rotation (rotatable categories only)
//! 4. scale, with x negated for right-side halves (mirrored source image)
//! 5. translate by the visual-center correction minus half the image size
//!
//! The order is load-bearing: user offsets stay relative to the anatomical
//! anchor, rotation tilts the part in place before the mirror flip, and the
//! visual-center correction is a local-space nudge composed after
//! rotate/scale. That last point means the correction itself is affected by
//! the accumulated rotation/scale; downstream artwork is tuned against that
//! behavior, so it must not be "fixed".

use crate::{
    foundation::core::{Affine, CanvasSize, Point, Vec2},
    registry::category::Category,
    state::part::PlacedPart,
};

/// Steps 1–2: the absolute canvas position of the part's transform origin.
///
/// No rotation or scale enters here; this is also the `finalX`/`finalY`
/// arithmetic used by the coordinate exporter.
pub fn placement_offset(part: &PlacedPart, category: &Category, canvas: CanvasSize) -> Point {
    let anchored = canvas.center() + category.anchor_offset();
    let symmetry = symmetry_offset(part, category);
    anchored + Vec2::new(symmetry + part.x, part.y)
}

/// The signed horizontal symmetry shift for a pair half; `0` for plain parts.
pub fn symmetry_offset(part: &PlacedPart, category: &Category) -> f64 {
    if part.is_left || part.is_right {
        let total = category.default_spacing() + part.spacing;
        if part.is_left { total } else { -total }
    } else {
        0.0
    }
}

/// Steps 1–4: the part's placement transform (origin, tilt, mirrored scale).
pub fn part_affine(part: &PlacedPart, category: &Category, canvas: CanvasSize) -> Affine {
    let origin = placement_offset(part, category, canvas);
    let rotation = effective_rotation_rad(part, category);
    let scale_x = if part.is_right { -part.scale_x } else { part.scale_x };

    Affine::translate(origin.to_vec2())
        * Affine::rotate(rotation)
        * Affine::scale_non_uniform(scale_x, part.scale_y)
}

/// Rotation in radians, gated on the category's rotation eligibility.
pub fn effective_rotation_rad(part: &PlacedPart, category: &Category) -> f64 {
    if category.can_rotate() {
        f64::from(part.rotation).to_radians()
    } else {
        0.0
    }
}

/// Steps 1–5: the full transform mapping image-local pixels to the canvas.
///
/// `image_width`/`image_height` are the source image's pixel dimensions; the
/// final local translate lands the image's visual center (not its bounding-box
/// center) on the origin established by the placement transform.
pub fn draw_transform(
    part: &PlacedPart,
    category: &Category,
    canvas: CanvasSize,
    image_width: f64,
    image_height: f64,
) -> Affine {
    let correction = category.visual_center_offset()
        + Vec2::new(-image_width / 2.0, -image_height / 2.0);
    part_affine(part, category, canvas) * Affine::translate(correction)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/pipeline.rs"]
mod tests;
