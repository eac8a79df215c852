//! Symmetry pair coordination.
//!
//! Symmetry-eligible categories are represented by zero or exactly two
//! records (`_left` and `_right`), never one. The helpers here create,
//! destroy, and propagate edits across a pair so that `id`, `x`, `y`,
//! `scaleX`, `scaleY` and `spacing` stay equal between halves, while
//! rotation is mirrored (left = slider value, right = its negation).

use std::collections::BTreeMap;

use crate::{
    registry::category::Category,
    state::edit::TransformField,
    state::part::{PlacedPart, Side, slot_key},
};

/// Create (or re-pick) the left/right pair for `category`.
///
/// When both halves already exist only `id` changes; placement survives a
/// re-pick. A fresh pair gets category defaults, carrying over any spacing
/// adjustment left behind by a previous pair.
pub fn create_pair(parts: &mut BTreeMap<String, PlacedPart>, category: &Category, id: &str) {
    let left_key = slot_key(&category.name, Some(Side::Left));
    let right_key = slot_key(&category.name, Some(Side::Right));

    if parts.contains_key(&left_key) && parts.contains_key(&right_key) {
        for key in [&left_key, &right_key] {
            if let Some(half) = parts.get_mut(key) {
                half.id = id.to_string();
            }
        }
        return;
    }

    let carried_spacing = parts
        .get(&left_key)
        .or_else(|| parts.get(&right_key))
        .map(|half| half.spacing)
        .unwrap_or(0.0);

    parts.insert(
        left_key,
        PlacedPart::pair_half(category, id, Side::Left, carried_spacing),
    );
    parts.insert(
        right_key,
        PlacedPart::pair_half(category, id, Side::Right, carried_spacing),
    );
}

/// Remove both halves of `category`'s pair; returns `true` if any existed.
pub fn remove_pair(parts: &mut BTreeMap<String, PlacedPart>, category_name: &str) -> bool {
    let left = parts.remove(&slot_key(category_name, Some(Side::Left)));
    let right = parts.remove(&slot_key(category_name, Some(Side::Right)));
    left.is_some() || right.is_some()
}

/// Route a transform edit to both halves of a pair.
///
/// Scale, position and spacing are applied identically. Rotation applies only
/// when the category allows it: the left half receives the raw value and the
/// right half its negation, so one control tilts both halves toward or away
/// from the midline together.
pub fn apply_pair_transform(
    parts: &mut BTreeMap<String, PlacedPart>,
    category: &Category,
    field: TransformField,
    value: f64,
) {
    for side in [Side::Left, Side::Right] {
        let Some(half) = parts.get_mut(&slot_key(&category.name, Some(side))) else {
            continue;
        };
        match field {
            TransformField::ScaleX => half.scale_x = value,
            TransformField::ScaleY => half.scale_y = value,
            TransformField::X => half.x = value,
            TransformField::Y => half.y = value,
            TransformField::Spacing => half.spacing = value,
            TransformField::Rotation => {
                if category.can_rotate() {
                    let degrees = value.round() as i32;
                    half.rotation = if side == Side::Right { -degrees } else { degrees };
                }
            }
        }
    }
}

/// Restore both halves of a pair to category defaults atomically.
pub fn reset_pair(parts: &mut BTreeMap<String, PlacedPart>, category: &Category) {
    for side in [Side::Left, Side::Right] {
        if let Some(half) = parts.get_mut(&slot_key(&category.name, Some(side))) {
            half.scale_x = category.default_scale();
            half.scale_y = category.default_scale();
            half.x = 0.0;
            half.y = 0.0;
            half.rotation = 0;
            half.spacing = 0.0;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/symmetry.rs"]
mod tests;
