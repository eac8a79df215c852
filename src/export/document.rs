use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{
    foundation::core::CanvasSize,
    foundation::error::{FacetteError, FacetteResult},
    registry::category::PartRegistry,
    state::part::{PlacedPart, Side},
    state::store::{CleanupStats, PartStore},
    transform::pipeline,
};

/// A plain `{x, y}` pair as the document encodes offsets and centers.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OffsetXY {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

/// Spacing breakdown attached to each exported pair half.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymmetryInfo {
    /// Category baseline gap.
    pub default_spacing: f64,
    /// User adjustment on top of the baseline.
    pub spacing_adjustment: f64,
    /// Baseline plus adjustment.
    pub total_spacing: f64,
    /// Signed horizontal shift actually applied to this half.
    pub symmetry_offset: f64,
    /// Which half this record is.
    pub side: Side,
}

/// One part as persisted: the stored record plus its resolved canvas
/// position.
///
/// `finalX`/`finalY` are absolute canvas coordinates (center + category
/// anchor + symmetry shift + user offset); rotation, scale and spacing stay
/// in their stored relative form so a restore reproduces the edit state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExportedPart {
    /// The stored record, flattened into the same object.
    #[serde(flatten)]
    pub part: PlacedPart,
    /// Absolute canvas x of the part's transform origin.
    #[serde(rename = "finalX")]
    pub final_x: f64,
    /// Absolute canvas y of the part's transform origin.
    #[serde(rename = "finalY")]
    pub final_y: f64,
    /// The category anchor offset that contributed to the final position.
    #[serde(rename = "categoryOffset")]
    pub category_offset: OffsetXY,
    /// Present only on symmetry pair halves.
    #[serde(
        rename = "symmetryInfo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub symmetry_info: Option<SymmetryInfo>,
    /// Canvas center the coordinates are relative to.
    #[serde(rename = "canvasCenter")]
    pub canvas_center: OffsetXY,
}

/// Self-description block so a consumer can interpret the coordinates
/// without this crate.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSystem {
    /// What `finalX`/`finalY` and `categoryOffset` mean.
    pub description: String,
    /// Canvas center used as the placement origin.
    pub canvas_center: OffsetXY,
    /// How symmetry pair halves are annotated.
    pub symmetrical_parts: String,
}

/// The complete persisted portrait: every placed part in absolute
/// coordinates plus the context needed to reinterpret them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PortraitDocument {
    /// When the document was produced (UTC).
    pub timestamp: DateTime<Utc>,
    /// Coordinate-system self-description.
    #[serde(rename = "coordinateSystem")]
    pub coordinate_system: CoordinateSystem,
    /// Exported parts keyed by slot.
    pub parts: BTreeMap<String, ExportedPart>,
    /// Canvas dimensions the coordinates assume.
    #[serde(rename = "canvasSize")]
    pub canvas_size: CanvasSize,
    /// Baseline symmetry gaps per category, for consumers that re-derive
    /// spacing.
    #[serde(rename = "defaultSpacingConfig")]
    pub default_spacing_config: BTreeMap<String, f64>,
}

impl PortraitDocument {
    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> FacetteResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FacetteError::serde(format!("encode portrait document: {e}")))
    }

    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> FacetteResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| FacetteError::serde(format!("decode portrait document: {e}")))
    }
}

/// Snapshot `store` into a portrait document with absolute coordinates.
///
/// Parts whose category is not in the registry are left out with a
/// diagnostic rather than failing the export.
#[tracing::instrument(skip_all, fields(parts = store.len()))]
pub fn to_document(
    store: &PartStore,
    registry: &PartRegistry,
    canvas: CanvasSize,
) -> PortraitDocument {
    let center = canvas.center();
    let mut parts = BTreeMap::new();

    for (slot, part) in store.parts() {
        let Some(category) = registry.get(&part.category) else {
            tracing::warn!(slot, category = part.category, "excluding unknown category");
            continue;
        };

        let origin = pipeline::placement_offset(part, category, canvas);
        let anchor = category.anchor_offset();

        let symmetry_info = part.side().map(|side| {
            let default_spacing = category.default_spacing();
            let total_spacing = default_spacing + part.spacing;
            SymmetryInfo {
                default_spacing,
                spacing_adjustment: part.spacing,
                total_spacing,
                symmetry_offset: pipeline::symmetry_offset(part, category),
                side,
            }
        });

        parts.insert(
            slot.clone(),
            ExportedPart {
                part: part.clone(),
                final_x: origin.x,
                final_y: origin.y,
                category_offset: OffsetXY {
                    x: anchor.x,
                    y: anchor.y,
                },
                symmetry_info,
                canvas_center: OffsetXY {
                    x: center.x,
                    y: center.y,
                },
            },
        );
    }

    let default_spacing_config = registry
        .iter()
        .filter(|(_, c)| c.is_symmetrical())
        .map(|(name, c)| (name.clone(), c.default_spacing()))
        .collect();

    PortraitDocument {
        timestamp: Utc::now(),
        coordinate_system: CoordinateSystem {
            description: "finalX/finalY are absolute canvas coordinates; categoryOffset is the \
                          category's baseline anchor offset"
                .to_string(),
            canvas_center: OffsetXY {
                x: center.x,
                y: center.y,
            },
            symmetrical_parts: "pair halves carry symmetryInfo with the baseline gap and the \
                                user adjustment"
                .to_string(),
        },
        parts,
        canvas_size: canvas,
        default_spacing_config,
    }
}

/// Rebuild a part store from a persisted document.
///
/// The restored records replace the store wholesale and then go through a
/// cleanup pass; documents are external input and may carry stale or
/// swapped fields.
#[tracing::instrument(skip_all, fields(parts = doc.parts.len()))]
pub fn from_document(
    doc: &PortraitDocument,
    registry: &PartRegistry,
) -> (PartStore, CleanupStats) {
    let parts = doc
        .parts
        .iter()
        .map(|(slot, exported)| (slot.clone(), exported.part.clone()))
        .collect();
    let mut store = PartStore::from_parts(parts);
    let stats = store.cleanup(registry);
    (store, stats)
}

#[cfg(test)]
#[path = "../../tests/unit/export/document.rs"]
mod tests;
