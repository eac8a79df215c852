use super::*;

const MANIFEST_JSON: &str = r#"{
    "categories": {
        "eye": { "name": "Eyes", "parts": [0, 1, 2, 12], "defaultPart": 1, "zIndex": 5 },
        "nose": { "name": "Nose", "parts": [0, 1], "defaultPart": 0, "zIndex": 6 }
    }
}"#;

#[test]
fn parses_wire_field_names() {
    let manifest = Manifest::from_json_str(MANIFEST_JSON).unwrap();
    let eye = &manifest.categories["eye"];
    assert_eq!(eye.name, "Eyes");
    assert_eq!(eye.parts, vec![0, 1, 2, 12]);
    assert_eq!(eye.default_part, 1);
    assert_eq!(eye.z_index, 5);
}

#[test]
fn rejects_default_part_not_listed() {
    let bad = r#"{
        "categories": {
            "eye": { "name": "Eyes", "parts": [0, 1], "defaultPart": 9, "zIndex": 5 }
        }
    }"#;
    let err = Manifest::from_json_str(bad).unwrap_err();
    assert!(err.to_string().contains("defaultPart"));
}

#[test]
fn rejects_negative_part_ids() {
    let bad = r#"{
        "categories": {
            "eye": { "name": "Eyes", "parts": [0, -3], "defaultPart": 0, "zIndex": 5 }
        }
    }"#;
    assert!(Manifest::from_json_str(bad).is_err());
}

#[test]
fn zero_default_part_needs_no_listing() {
    let ok = r#"{
        "categories": {
            "eye": { "name": "Eyes", "parts": [1, 2], "defaultPart": 0, "zIndex": 5 }
        }
    }"#;
    assert!(Manifest::from_json_str(ok).is_ok());
}

#[test]
fn registry_carries_ids_and_paint_order() {
    let registry = Manifest::from_json_str(MANIFEST_JSON)
        .unwrap()
        .into_registry()
        .unwrap();
    assert_eq!(registry.len(), 2);

    let eye = registry.get("eye").unwrap();
    assert!(eye.valid_ids.contains(&12));
    assert_eq!(eye.default_id, 1);
    assert_eq!(eye.z_order, 5);
    assert!(registry.is_known("nose"));
    assert!(!registry.is_known("tail"));
}
