use super::*;

fn eye() -> Category {
    Category::new("eye".to_string(), vec![0, 1, 2, 12], 1, 5)
}

fn pair(id: &str) -> BTreeMap<String, PlacedPart> {
    let mut parts = BTreeMap::new();
    create_pair(&mut parts, &eye(), id);
    parts
}

#[test]
fn create_pair_places_exactly_two_halves() {
    let parts = pair("1");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts["eye_left"].side(), Some(Side::Left));
    assert_eq!(parts["eye_right"].side(), Some(Side::Right));
    assert_eq!(parts["eye_left"].id, "1");
    assert_eq!(parts["eye_right"].id, "1");
}

#[test]
fn repick_changes_only_the_id() {
    let mut parts = pair("1");
    apply_pair_transform(&mut parts, &eye(), TransformField::X, 30.0);
    apply_pair_transform(&mut parts, &eye(), TransformField::Rotation, 10.0);
    apply_pair_transform(&mut parts, &eye(), TransformField::Spacing, 5.0);

    create_pair(&mut parts, &eye(), "12");

    let left = &parts["eye_left"];
    assert_eq!(left.id, "12");
    assert_eq!(left.x, 30.0);
    assert_eq!(left.rotation, 10);
    assert_eq!(left.spacing, 5.0);
    assert_eq!(parts["eye_right"].id, "12");
    assert_eq!(parts["eye_right"].rotation, -10);
}

#[test]
fn fresh_pair_carries_spacing_from_a_leftover_half() {
    let mut parts = pair("1");
    apply_pair_transform(&mut parts, &eye(), TransformField::Spacing, 8.0);
    parts.remove("eye_right");

    create_pair(&mut parts, &eye(), "2");

    assert_eq!(parts.len(), 2);
    assert_eq!(parts["eye_left"].spacing, 8.0);
    assert_eq!(parts["eye_right"].spacing, 8.0);
    // Everything else resets to category defaults.
    assert_eq!(parts["eye_left"].rotation, 0);
    assert_eq!(parts["eye_left"].scale_x, 0.2);
}

#[test]
fn shared_fields_stay_equal_across_the_pair() {
    let mut parts = pair("1");
    apply_pair_transform(&mut parts, &eye(), TransformField::ScaleX, 0.3);
    apply_pair_transform(&mut parts, &eye(), TransformField::Y, -12.0);
    apply_pair_transform(&mut parts, &eye(), TransformField::Spacing, 4.0);

    let (left, right) = (&parts["eye_left"], &parts["eye_right"]);
    assert_eq!(left.scale_x, right.scale_x);
    assert_eq!(left.y, right.y);
    assert_eq!(left.spacing, right.spacing);
}

#[test]
fn rotation_is_antisymmetric() {
    let mut parts = pair("1");
    apply_pair_transform(&mut parts, &eye(), TransformField::Rotation, 25.0);
    assert_eq!(parts["eye_left"].rotation, 25);
    assert_eq!(parts["eye_right"].rotation, -25);

    apply_pair_transform(&mut parts, &eye(), TransformField::Rotation, -7.0);
    assert_eq!(parts["eye_left"].rotation, -7);
    assert_eq!(parts["eye_right"].rotation, 7);
}

#[test]
fn remove_pair_drops_both_halves() {
    let mut parts = pair("1");
    assert!(remove_pair(&mut parts, "eye"));
    assert!(parts.is_empty());
    assert!(!remove_pair(&mut parts, "eye"));
}

#[test]
fn reset_pair_restores_defaults_including_spacing() {
    let mut parts = pair("1");
    apply_pair_transform(&mut parts, &eye(), TransformField::X, 30.0);
    apply_pair_transform(&mut parts, &eye(), TransformField::Rotation, 15.0);
    apply_pair_transform(&mut parts, &eye(), TransformField::Spacing, 9.0);

    reset_pair(&mut parts, &eye());

    for slot in ["eye_left", "eye_right"] {
        let half = &parts[slot];
        assert_eq!(half.x, 0.0);
        assert_eq!(half.rotation, 0);
        assert_eq!(half.spacing, 0.0);
        assert_eq!(half.scale_x, 0.2);
    }
    // Side tags and the picked id survive a reset.
    assert_eq!(parts["eye_left"].id, "1");
    assert_eq!(parts["eye_left"].side(), Some(Side::Left));
}
