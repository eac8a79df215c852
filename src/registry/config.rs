//! Hand-tuned per-category placement constants.
//!
//! These tables describe where each facial-feature class naturally sits on a
//! generic face and how its source artwork is centered. They are consumed by
//! both the renderer and the coordinate exporter, so there is exactly one copy.

use crate::foundation::core::Vec2;

/// Categories whose parts are placed as linked left/right pairs.
pub const SYMMETRICAL_CATEGORIES: [&str; 3] = ["eye", "ear", "eyebrow"];

/// Categories whose parts may be rotated (and whose pairs accept spacing).
pub const ROTATABLE_CATEGORIES: [&str; 3] = ["eye", "eyebrow", "ear"];

/// Lower bound on the relative (slider-unit) scale of any part.
pub const MIN_RELATIVE_SCALE: f64 = 0.1;
/// Upper bound on the relative (slider-unit) scale of any part.
pub const MAX_RELATIVE_SCALE: f64 = 3.0;
/// User position offsets are clamped to `[-MAX_POSITION, MAX_POSITION]`.
pub const MAX_POSITION: f64 = 200.0;
/// Rotation degrees are clamped to `[-MAX_ROTATION_DEG, MAX_ROTATION_DEG]`.
pub const MAX_ROTATION_DEG: i32 = 180;
/// Spacing adjustments are clamped to `[-MAX_SPACING, MAX_SPACING]`.
pub const MAX_SPACING: f64 = 200.0;

/// Default absolute scale for a category (natural face proportions).
pub fn default_scale(category: &str) -> f64 {
    match category {
        "hair" => 1.1,
        "eyebrow" | "eye" | "nose" => 0.2,
        "ear" => 0.4,
        "mouth" | "mouse" => 0.3,
        "beard" => 1.2,
        "glasses" => 0.5,
        "acc" => 1.8,
        _ => 1.0,
    }
}

/// Fixed anchor offset from canvas center for a category.
///
/// Positive y points down the canvas: eyes sit slightly below center, the
/// nose further down, the mouth lower still.
pub fn anchor_offset(category: &str) -> Vec2 {
    match category {
        "eyebrow" => Vec2::new(0.0, -15.0),
        "eye" => Vec2::new(0.0, 15.0),
        "ear" => Vec2::new(0.0, 40.0),
        "nose" => Vec2::new(0.0, 70.0),
        "mouth" | "mouse" => Vec2::new(0.0, 130.0),
        "glasses" => Vec2::new(0.0, 20.0),
        _ => Vec2::ZERO,
    }
}

/// Per-category pixel nudge compensating for source artwork whose bounding
/// box is not centered on its semantic focal point.
pub fn visual_center_offset(category: &str) -> Vec2 {
    match category {
        "outline" => Vec2::new(-217.0, -227.0),
        "hair" => Vec2::new(-219.0, -220.0),
        "eyebrow" => Vec2::new(3.0, -200.0),
        "eye" => Vec2::new(-2.0, -210.0),
        "ear" => Vec2::new(0.0, -220.0),
        "nose" => Vec2::new(-220.0, -220.0),
        "mouth" | "mouse" => Vec2::new(-220.0, -220.0),
        "beard" => Vec2::new(-150.0, -50.0),
        "glasses" => Vec2::new(-220.0, -220.0),
        "acc" => Vec2::new(-215.0, -300.0),
        _ => Vec2::ZERO,
    }
}

/// Default gap between the halves of a symmetry pair, per category.
pub fn default_spacing(category: &str) -> f64 {
    match category {
        "eye" | "eyebrow" => 15.0,
        "ear" => 50.0,
        _ => 0.0,
    }
}

/// On-disk folder for a category's artwork.
///
/// Identical to the category name except one historical alias: `mouth`
/// artwork ships in a folder named `mouse`.
pub fn folder_name(category: &str) -> &str {
    match category {
        "mouth" => "mouse",
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/config.rs"]
mod tests;
