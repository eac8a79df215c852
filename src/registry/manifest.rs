use std::collections::BTreeMap;

use anyhow::Context;

use crate::{
    foundation::error::{FacetteError, FacetteResult},
    registry::category::{Category, PartRegistry},
};

/// Consumed part-catalog manifest.
///
/// This is the external contract: a JSON object listing, per category, every
/// valid part number (including the `0` sentinel for "none"), the default
/// selection, and the paint order. Loaded once at startup; never mutated.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    /// Category table keyed by category name.
    pub categories: BTreeMap<String, ManifestCategory>,
}

/// One category entry in the manifest.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ManifestCategory {
    /// Display label.
    pub name: String,
    /// Every valid part id; `0` means "no part".
    pub parts: Vec<i64>,
    /// Pre-selected part id, or `0` for none.
    #[serde(rename = "defaultPart")]
    pub default_part: i64,
    /// Paint order, ascending.
    #[serde(rename = "zIndex")]
    pub z_index: i32,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json_str(json: &str) -> FacetteResult<Self> {
        let manifest: Self = serde_json::from_str(json)
            .map_err(|e| FacetteError::manifest(format!("parse manifest: {e}")))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load and parse a manifest file.
    pub fn from_path(path: &std::path::Path) -> FacetteResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read manifest from '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Validate manifest invariants.
    pub fn validate(&self) -> FacetteResult<()> {
        for (key, cat) in &self.categories {
            if key.trim().is_empty() {
                return Err(FacetteError::manifest("category key must be non-empty"));
            }
            if cat.default_part != 0 && !cat.parts.contains(&cat.default_part) {
                return Err(FacetteError::manifest(format!(
                    "category '{key}' defaultPart {} is not listed in parts",
                    cat.default_part
                )));
            }
            if cat.parts.iter().any(|&id| id < 0) {
                return Err(FacetteError::manifest(format!(
                    "category '{key}' lists a negative part id"
                )));
            }
        }
        Ok(())
    }

    /// Build the immutable [`PartRegistry`] from this manifest.
    pub fn into_registry(self) -> FacetteResult<PartRegistry> {
        self.validate()?;
        let categories = self
            .categories
            .into_iter()
            .map(|(key, cat)| {
                let category = Category::new(key.clone(), cat.parts, cat.default_part, cat.z_index);
                (key, category)
            })
            .collect();
        Ok(PartRegistry::new(categories))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/manifest.rs"]
mod tests;
