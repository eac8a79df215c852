use super::*;

use crate::{
    registry::category::Category,
    state::edit::TransformField,
};

fn registry() -> PartRegistry {
    let mut categories = BTreeMap::new();
    categories.insert(
        "eye".to_string(),
        Category::new("eye".to_string(), vec![0, 1, 2, 12], 1, 5),
    );
    categories.insert(
        "nose".to_string(),
        Category::new("nose".to_string(), vec![0, 1, 2], 1, 6),
    );
    PartRegistry::new(categories)
}

fn eye_scenario_store(registry: &PartRegistry) -> PartStore {
    let mut store = PartStore::new();
    store.set_part(registry, "eye", "12").unwrap();
    store
        .set_transform(registry, TransformField::Spacing, 5.0)
        .unwrap();
    store
}

#[test]
fn final_coordinates_replay_the_placement_arithmetic() {
    let registry = registry();
    let store = eye_scenario_store(&registry);

    let doc = to_document(&store, &registry, CanvasSize::default());

    // Total gap 15 + 5 = 20 either side of center; the eye anchor sits 15
    // below center.
    let left = &doc.parts["eye_left"];
    assert_eq!(left.final_x, 320.0);
    assert_eq!(left.final_y, 315.0);
    let right = &doc.parts["eye_right"];
    assert_eq!(right.final_x, 280.0);
    assert_eq!(right.final_y, 315.0);
}

#[test]
fn pair_halves_carry_symmetry_info() {
    let registry = registry();
    let store = eye_scenario_store(&registry);

    let doc = to_document(&store, &registry, CanvasSize::default());

    let info = doc.parts["eye_left"].symmetry_info.unwrap();
    assert_eq!(info.default_spacing, 15.0);
    assert_eq!(info.spacing_adjustment, 5.0);
    assert_eq!(info.total_spacing, 20.0);
    assert_eq!(info.symmetry_offset, 20.0);
    assert_eq!(info.side, Side::Left);

    let info = doc.parts["eye_right"].symmetry_info.unwrap();
    assert_eq!(info.symmetry_offset, -20.0);
    assert_eq!(info.side, Side::Right);
}

#[test]
fn plain_parts_have_no_symmetry_info() {
    let registry = registry();
    let mut store = PartStore::new();
    store.set_part(&registry, "nose", "2").unwrap();

    let doc = to_document(&store, &registry, CanvasSize::default());
    let nose = &doc.parts["nose"];
    assert!(nose.symmetry_info.is_none());
    assert_eq!(nose.final_x, 300.0);
    assert_eq!(nose.final_y, 370.0);
    assert_eq!(nose.category_offset.y, 70.0);
}

#[test]
fn document_lists_the_spacing_config_for_pair_categories() {
    let registry = registry();
    let doc = to_document(&PartStore::new(), &registry, CanvasSize::default());

    assert_eq!(doc.default_spacing_config.len(), 1);
    assert_eq!(doc.default_spacing_config["eye"], 15.0);
    assert_eq!(doc.canvas_size, CanvasSize::default());
    assert_eq!(doc.coordinate_system.canvas_center.x, 300.0);
}

#[test]
fn unknown_categories_are_excluded_from_the_document() {
    let registry = registry();
    let mut parts = BTreeMap::new();
    parts.insert(
        "tail".to_string(),
        PlacedPart {
            category: "tail".to_string(),
            ..PlacedPart::with_defaults(registry.get("nose").unwrap(), "1")
        },
    );
    let store = PartStore::from_parts(parts);

    let doc = to_document(&store, &registry, CanvasSize::default());
    assert!(doc.parts.is_empty());
}

#[test]
fn wire_field_names_match_the_document_format() {
    let registry = registry();
    let store = eye_scenario_store(&registry);
    let doc = to_document(&store, &registry, CanvasSize::default());

    let value = serde_json::to_value(&doc).unwrap();
    assert!(value.get("coordinateSystem").is_some());
    assert!(value.get("canvasSize").is_some());
    assert!(value.get("defaultSpacingConfig").is_some());

    let left = &value["parts"]["eye_left"];
    assert!(left.get("finalX").is_some());
    assert!(left.get("finalY").is_some());
    assert!(left.get("categoryOffset").is_some());
    assert!(left.get("canvasCenter").is_some());
    assert!(left.get("scaleX").is_some());
    assert_eq!(left["isLeft"], serde_json::json!(true));
    assert_eq!(
        left["symmetryInfo"]["defaultSpacing"],
        serde_json::json!(15.0)
    );
}

#[test]
fn restore_round_trips_the_stored_records() {
    let registry = registry();
    let mut store = eye_scenario_store(&registry);
    store.set_part(&registry, "nose", "2").unwrap();
    store
        .set_transform(&registry, TransformField::X, 25.0)
        .unwrap();

    let doc = to_document(&store, &registry, CanvasSize::default());
    let json = doc.to_json_string().unwrap();
    let parsed = PortraitDocument::from_json_str(&json).unwrap();
    let (restored, stats) = from_document(&parsed, &registry);

    assert_eq!(stats, CleanupStats::default());
    assert_eq!(restored.parts(), store.parts());
}

#[test]
fn restore_cleans_untrusted_documents() {
    let registry = registry();
    let mut parts = BTreeMap::new();
    parts.insert(
        "eye_left".to_string(),
        PlacedPart {
            id: "eye".to_string(),
            category: "7".to_string(),
            ..PlacedPart::with_defaults(registry.get("eye").unwrap(), "x")
        },
    );
    parts.insert(
        "junk".to_string(),
        PlacedPart {
            category: "tail".to_string(),
            ..PlacedPart::with_defaults(registry.get("nose").unwrap(), "1")
        },
    );
    let store = PartStore::from_parts(parts);
    let doc = to_document_untrusted(&store);

    let (restored, stats) = from_document(&doc, &registry);

    assert_eq!(stats.repaired, 1);
    assert_eq!(stats.dropped, 1);
    assert_eq!(restored.parts()["eye_left"].category, "eye");
    assert_eq!(restored.parts()["eye_left"].id, "7");
}

// Snapshot a store without the export-side category filtering, so broken
// records survive into the document the way a foreign producer would write
// them.
fn to_document_untrusted(store: &PartStore) -> PortraitDocument {
    let parts = store
        .parts()
        .iter()
        .map(|(slot, part)| {
            (
                slot.clone(),
                ExportedPart {
                    part: part.clone(),
                    final_x: 0.0,
                    final_y: 0.0,
                    category_offset: OffsetXY::default(),
                    symmetry_info: None,
                    canvas_center: OffsetXY { x: 300.0, y: 300.0 },
                },
            )
        })
        .collect();
    PortraitDocument {
        timestamp: Utc::now(),
        coordinate_system: CoordinateSystem {
            description: String::new(),
            canvas_center: OffsetXY { x: 300.0, y: 300.0 },
            symmetrical_parts: String::new(),
        },
        parts,
        canvas_size: CanvasSize::default(),
        default_spacing_config: BTreeMap::new(),
    }
}
