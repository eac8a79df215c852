use std::collections::BTreeMap;

use crate::{
    foundation::error::{FacetteError, FacetteResult},
    registry::category::{Category, PartRegistry},
    registry::config,
    state::edit::{Edit, TransformField},
    state::part::{PlacedPart, Side, base_category, slot_key},
    state::symmetry,
};

/// Counts from one [`PartStore::cleanup`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanupStats {
    /// Records repaired by the category/id swap heuristic.
    pub repaired: usize,
    /// Records dropped as structurally invalid.
    pub dropped: usize,
}

/// The mutable mapping of placed parts; source of truth for composition.
///
/// Keys are slot keys: the bare category name for plain parts, or
/// `{category}_left` / `{category}_right` for symmetry halves. All mutation
/// goes through the operations below (or [`PartStore::apply`] with an
/// [`Edit`] command), which maintain the pair invariants.
#[derive(Clone, Debug, Default)]
pub struct PartStore {
    parts: BTreeMap<String, PlacedPart>,
    selected: Option<String>,
}

impl PartStore {
    /// Empty store with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from raw records (restore path). Callers must run
    /// [`PartStore::cleanup`] afterwards; restored data is untrusted.
    pub fn from_parts(parts: BTreeMap<String, PlacedPart>) -> Self {
        Self {
            parts,
            selected: None,
        }
    }

    /// Store pre-populated with each category's default part.
    pub fn with_defaults(registry: &PartRegistry) -> Self {
        let mut parts = BTreeMap::new();
        for (name, category) in registry.iter() {
            if category.default_id == 0 {
                continue;
            }
            let id = category.default_id.to_string();
            if category.is_symmetrical() {
                symmetry::create_pair(&mut parts, category, &id);
            } else {
                parts.insert(name.clone(), PlacedPart::with_defaults(category, &id));
            }
        }
        Self {
            parts,
            selected: None,
        }
    }

    /// Borrow the record map.
    pub fn parts(&self) -> &BTreeMap<String, PlacedPart> {
        &self.parts
    }

    /// Slot key currently targeted by transform edits.
    pub fn selected_slot(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected record, if any.
    pub fn selected_part(&self) -> Option<&PlacedPart> {
        self.selected.as_ref().and_then(|slot| self.parts.get(slot))
    }

    /// Number of placed records (pair halves count individually).
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether no parts are placed.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Interpret one [`Edit`] command.
    pub fn apply(&mut self, registry: &PartRegistry, edit: &Edit) -> FacetteResult<()> {
        match edit {
            Edit::SetPart { category, id } => self.set_part(registry, category, id),
            Edit::SetTransform { field, value } => self.set_transform(registry, *field, *value),
            Edit::Select { slot } => {
                self.select(registry, slot.as_deref());
                Ok(())
            }
            Edit::Reset => {
                self.reset_selected(registry);
                Ok(())
            }
            Edit::Clear => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Select part `id` for `category`; an empty id clears the slot(s).
    ///
    /// Re-picking an id on an existing slot is non-destructive: only `id`
    /// changes and every transform field survives.
    pub fn set_part(
        &mut self,
        registry: &PartRegistry,
        category_name: &str,
        id: &str,
    ) -> FacetteResult<()> {
        let category = registry.get(category_name).ok_or_else(|| {
            FacetteError::validation(format!("unknown category '{category_name}'"))
        })?;

        if id.trim().is_empty() {
            self.remove_category(category, category_name);
            return Ok(());
        }

        if category.is_symmetrical() {
            symmetry::create_pair(&mut self.parts, category, id);
            self.selected = Some(slot_key(category_name, Some(Side::Left)));
        } else {
            match self.parts.get_mut(category_name) {
                Some(existing) => existing.id = id.to_string(),
                None => {
                    self.parts
                        .insert(category_name.to_string(), PlacedPart::with_defaults(category, id));
                }
            }
            self.selected = Some(category_name.to_string());
        }
        Ok(())
    }

    fn remove_category(&mut self, category: &Category, category_name: &str) {
        if category.is_symmetrical() {
            let left = slot_key(category_name, Some(Side::Left));
            let right = slot_key(category_name, Some(Side::Right));
            if self
                .selected
                .as_deref()
                .is_some_and(|s| s == category_name || s == left || s == right)
            {
                self.selected = None;
            }
            symmetry::remove_pair(&mut self.parts, category_name);
        } else {
            if self.selected.as_deref() == Some(category_name) {
                self.selected = None;
            }
            self.parts.remove(category_name);
        }
    }

    /// Remove a single slot by key, deselecting it if needed.
    pub fn delete_part(&mut self, slot: &str) {
        if self.selected.as_deref() == Some(slot) {
            self.selected = None;
        }
        self.parts.remove(slot);
    }

    /// Remove every record and deselect.
    pub fn clear(&mut self) {
        self.parts.clear();
        self.selected = None;
    }

    /// Target a slot for transform edits.
    ///
    /// Symmetry categories are always edited through their `_left` half: a
    /// bare category slot resolves to it. A slot with no record is a no-op.
    pub fn select(&mut self, registry: &PartRegistry, slot: Option<&str>) {
        let Some(slot) = slot else {
            self.selected = None;
            return;
        };
        let base = base_category(slot);
        let target = match registry.get(base) {
            Some(category) if category.is_symmetrical() && slot == base => {
                slot_key(base, Some(Side::Left))
            }
            _ => slot.to_string(),
        };
        if self.parts.contains_key(&target) {
            self.selected = Some(target);
        }
    }

    /// Apply a transform edit to the selected part (both halves of a pair).
    ///
    /// Values are absolute engine units and are clamped to the edit bounds.
    /// Rotation on a non-rotatable category is ignored.
    pub fn set_transform(
        &mut self,
        registry: &PartRegistry,
        field: TransformField,
        value: f64,
    ) -> FacetteResult<()> {
        let Some(slot) = self.selected.clone() else {
            return Err(FacetteError::validation("no part selected"));
        };
        let Some(part) = self.parts.get(&slot) else {
            return Err(FacetteError::validation(format!(
                "selected slot '{slot}' has no record"
            )));
        };
        let category_name = part.category.clone();
        let category = registry.get(&category_name).ok_or_else(|| {
            FacetteError::validation(format!("unknown category '{category_name}'"))
        })?;

        let value = clamp_edit(category, field, value);

        if category.is_symmetrical() {
            symmetry::apply_pair_transform(&mut self.parts, category, field, value);
            return Ok(());
        }

        let Some(part) = self.parts.get_mut(&slot) else {
            return Ok(());
        };
        match field {
            TransformField::ScaleX => part.scale_x = value,
            TransformField::ScaleY => part.scale_y = value,
            TransformField::X => part.x = value,
            TransformField::Y => part.y = value,
            TransformField::Rotation => {
                if category.can_rotate() {
                    part.rotation = value.round() as i32;
                }
            }
            // Spacing is meaningful only on pair halves.
            TransformField::Spacing => {}
        }
        Ok(())
    }

    /// Restore the selected part (or its whole pair) to category defaults.
    pub fn reset_selected(&mut self, registry: &PartRegistry) {
        let Some(part) = self.selected_part() else {
            return;
        };
        let category_name = part.category.clone();
        let Some(category) = registry.get(&category_name) else {
            return;
        };

        if category.is_symmetrical() {
            symmetry::reset_pair(&mut self.parts, category);
        } else if let Some(part) = self.selected.as_ref().and_then(|s| self.parts.get_mut(s)) {
            part.scale_x = category.default_scale();
            part.scale_y = category.default_scale();
            part.x = 0.0;
            part.y = 0.0;
            part.rotation = 0;
        }
    }

    /// Drop or repair structurally invalid records.
    ///
    /// Runs before every render and after every bulk restore. Rules, in
    /// order: an empty category drops the record; an unknown category whose
    /// `id` happens to name a known category gets the two fields swapped (a
    /// known upstream data-shape confusion); a still-unknown category drops
    /// the record; an id that does not coerce to an integer drops the record.
    /// The pass is idempotent.
    pub fn cleanup(&mut self, registry: &PartRegistry) -> CleanupStats {
        let mut stats = CleanupStats::default();
        let mut kept = BTreeMap::new();

        for (slot, mut part) in std::mem::take(&mut self.parts) {
            if part.category.trim().is_empty() {
                tracing::warn!(slot, "dropping part with empty category");
                stats.dropped += 1;
                continue;
            }

            if !registry.is_known(&part.category) && registry.is_known(&part.id) {
                tracing::warn!(
                    slot,
                    category = part.category,
                    id = part.id,
                    "repairing swapped category/id fields"
                );
                std::mem::swap(&mut part.category, &mut part.id);
                stats.repaired += 1;
            }

            if !registry.is_known(&part.category) {
                tracing::warn!(slot, category = part.category, "dropping unknown category");
                stats.dropped += 1;
                continue;
            }

            if part.part_number().is_none() {
                tracing::warn!(slot, id = part.id, "dropping non-numeric part id");
                stats.dropped += 1;
                continue;
            }

            kept.insert(slot, part);
        }

        if let Some(slot) = &self.selected
            && !kept.contains_key(slot)
        {
            self.selected = None;
        }
        self.parts = kept;
        stats
    }

    /// Records in paint order: ascending `zIndex`, slot key as a stable
    /// tiebreak so equal layers draw deterministically.
    pub fn sorted_parts(&self) -> Vec<(&String, &PlacedPart)> {
        let mut out: Vec<_> = self.parts.iter().collect();
        out.sort_by(|a, b| a.1.z_index.cmp(&b.1.z_index).then_with(|| a.0.cmp(b.0)));
        out
    }
}

fn clamp_edit(category: &Category, field: TransformField, value: f64) -> f64 {
    match field {
        TransformField::ScaleX | TransformField::ScaleY => value.clamp(
            category.absolute_scale(config::MIN_RELATIVE_SCALE),
            category.absolute_scale(config::MAX_RELATIVE_SCALE),
        ),
        TransformField::X | TransformField::Y => {
            value.clamp(-config::MAX_POSITION, config::MAX_POSITION)
        }
        TransformField::Rotation => value.clamp(
            f64::from(-config::MAX_ROTATION_DEG),
            f64::from(config::MAX_ROTATION_DEG),
        ),
        TransformField::Spacing => value.clamp(-config::MAX_SPACING, config::MAX_SPACING),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/store.rs"]
mod tests;
