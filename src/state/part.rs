use crate::registry::category::Category;

/// Which half of a symmetry pair a record represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The `_left` half (drawn on the canvas-right of the midline).
    Left,
    /// The `_right` half (mirrored, drawn canvas-left).
    Right,
}

/// One placed part: a category slot with its user transform.
///
/// `id` is kept as the raw string it arrived with; after a cleanup pass it is
/// guaranteed numeric-coercible (see [`PlacedPart::part_number`]). Field names
/// mirror the persisted document wire shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacedPart {
    /// Selected part id within the category.
    pub id: String,
    /// Owning category name.
    pub category: String,
    /// User x offset from the category anchor, canvas units.
    #[serde(default)]
    pub x: f64,
    /// User y offset from the category anchor, canvas units.
    #[serde(default)]
    pub y: f64,
    /// Absolute horizontal scale factor.
    #[serde(rename = "scaleX", default = "default_scale_field")]
    pub scale_x: f64,
    /// Absolute vertical scale factor.
    #[serde(rename = "scaleY", default = "default_scale_field")]
    pub scale_y: f64,
    /// Rotation in whole degrees; applied only for rotatable categories.
    #[serde(default)]
    pub rotation: i32,
    /// Adjustment to the symmetry gap; meaningful only on pair halves.
    #[serde(default)]
    pub spacing: f64,
    /// Paint order copied from the category at creation time.
    #[serde(rename = "zIndex", default)]
    pub z_index: i32,
    /// Set on the left half of a symmetry pair.
    #[serde(rename = "isLeft", default, skip_serializing_if = "is_false")]
    pub is_left: bool,
    /// Set on the right half of a symmetry pair.
    #[serde(rename = "isRight", default, skip_serializing_if = "is_false")]
    pub is_right: bool,
}

fn default_scale_field() -> f64 {
    1.0
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl PlacedPart {
    /// Build a fresh record with category defaults and no side tag.
    pub fn with_defaults(category: &Category, id: &str) -> Self {
        Self {
            id: id.to_string(),
            category: category.name.clone(),
            x: 0.0,
            y: 0.0,
            scale_x: category.default_scale(),
            scale_y: category.default_scale(),
            rotation: 0,
            spacing: 0.0,
            z_index: category.z_order,
            is_left: false,
            is_right: false,
        }
    }

    /// Build one half of a symmetry pair with category defaults.
    pub fn pair_half(category: &Category, id: &str, side: Side, spacing: f64) -> Self {
        Self {
            spacing,
            is_left: side == Side::Left,
            is_right: side == Side::Right,
            ..Self::with_defaults(category, id)
        }
    }

    /// The symmetry side of this record, if it is a pair half.
    pub fn side(&self) -> Option<Side> {
        match (self.is_left, self.is_right) {
            (true, false) => Some(Side::Left),
            (false, true) => Some(Side::Right),
            _ => None,
        }
    }

    /// Numeric part id, if the stored id coerces to an integer.
    pub fn part_number(&self) -> Option<i64> {
        self.id.trim().parse::<i64>().ok()
    }
}

/// Store key for a record: the bare category name, or the pair-half key.
pub fn slot_key(category: &str, side: Option<Side>) -> String {
    match side {
        None => category.to_string(),
        Some(Side::Left) => format!("{category}_left"),
        Some(Side::Right) => format!("{category}_right"),
    }
}

/// Strip a `_left`/`_right` suffix to recover the base category name.
pub fn base_category(slot: &str) -> &str {
    slot.strip_suffix("_left")
        .or_else(|| slot.strip_suffix("_right"))
        .unwrap_or(slot)
}

#[cfg(test)]
#[path = "../../tests/unit/state/part.rs"]
mod tests;
