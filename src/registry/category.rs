use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::core::Vec2,
    registry::config,
};

/// Static description of one part category, derived from the manifest.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Category {
    /// Category name (also the slot-key base).
    pub name: String,
    /// Every valid part id; `0` is the "no part" sentinel.
    pub valid_ids: BTreeSet<i64>,
    /// Pre-selected part id, or `0` for none.
    pub default_id: i64,
    /// Paint order, ascending.
    pub z_order: i32,
}

impl Category {
    /// Build a category from manifest fields.
    pub fn new(name: String, parts: Vec<i64>, default_id: i64, z_order: i32) -> Self {
        Self {
            name,
            valid_ids: parts.into_iter().collect(),
            default_id,
            z_order,
        }
    }

    /// Whether this category is placed as a linked left/right pair.
    pub fn is_symmetrical(&self) -> bool {
        config::SYMMETRICAL_CATEGORIES.contains(&self.name.as_str())
    }

    /// Whether rotation edits apply to this category.
    pub fn can_rotate(&self) -> bool {
        config::ROTATABLE_CATEGORIES.contains(&self.name.as_str())
    }

    /// Whether spacing edits apply (symmetry pairs only).
    pub fn allows_spacing(&self) -> bool {
        config::ROTATABLE_CATEGORIES.contains(&self.name.as_str())
    }

    /// Default absolute scale for new parts in this category.
    pub fn default_scale(&self) -> f64 {
        config::default_scale(&self.name)
    }

    /// Anchor offset from canvas center for this category.
    pub fn anchor_offset(&self) -> Vec2 {
        config::anchor_offset(&self.name)
    }

    /// Visual-center correction for this category's artwork.
    pub fn visual_center_offset(&self) -> Vec2 {
        config::visual_center_offset(&self.name)
    }

    /// Default symmetry-pair gap for this category.
    pub fn default_spacing(&self) -> f64 {
        config::default_spacing(&self.name)
    }

    /// On-disk artwork folder for this category.
    pub fn folder_name(&self) -> &str {
        config::folder_name(&self.name)
    }

    /// Convert an absolute scale into the user-facing relative unit
    /// (1.0 = "default size").
    pub fn relative_scale(&self, absolute: f64) -> f64 {
        absolute / self.default_scale()
    }

    /// Convert a user-facing relative scale into the absolute factor.
    pub fn absolute_scale(&self, relative: f64) -> f64 {
        relative * self.default_scale()
    }
}

/// Immutable registry of all known categories, built once from the manifest.
#[derive(Clone, Debug, Default)]
pub struct PartRegistry {
    categories: BTreeMap<String, Category>,
}

impl PartRegistry {
    /// Wrap a prepared category table.
    pub fn new(categories: BTreeMap<String, Category>) -> Self {
        Self { categories }
    }

    /// Lookup a category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Whether `name` names a known category.
    pub fn is_known(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Iterate categories in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Category)> {
        self.categories.iter()
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/category.rs"]
mod tests;
