//! The pure edit-command layer.
//!
//! UI adapters translate widget events into these values; the store
//! interprets them. This keeps every state mutation expressible as data.

/// One transform field addressable by an edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformField {
    /// Absolute horizontal scale.
    ScaleX,
    /// Absolute vertical scale.
    ScaleY,
    /// User x offset.
    X,
    /// User y offset.
    Y,
    /// Rotation in whole degrees.
    Rotation,
    /// Symmetry-gap adjustment.
    Spacing,
}

/// A single semantic edit applied to the part state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Edit {
    /// Select part `id` for `category`; an empty id clears the slot.
    SetPart {
        /// Target category name.
        category: String,
        /// Raw selected id; empty means "none".
        id: String,
    },
    /// Apply a transform edit to the selected part (both pair halves when
    /// the category is symmetrical).
    SetTransform {
        /// Field to modify.
        field: TransformField,
        /// New absolute value in engine units.
        value: f64,
    },
    /// Target a slot for subsequent transform edits.
    Select {
        /// Slot key, or `None` to deselect.
        slot: Option<String>,
    },
    /// Restore the selected part (or pair) to category defaults.
    Reset,
    /// Remove every placed part and deselect.
    Clear,
}
