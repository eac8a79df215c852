use super::*;

fn registry() -> PartRegistry {
    let mut categories = std::collections::BTreeMap::new();
    categories.insert(
        "nose".to_string(),
        crate::registry::category::Category::new("nose".to_string(), vec![0, 1], 1, 6),
    );
    PartRegistry::new(categories)
}

#[test]
fn empty_store_renders_the_background() {
    let store = PartStore::new();
    let cache = SvgAssetCache::new("does-not-exist");
    let canvas = CanvasSize::new(8, 8).unwrap();

    let frame = Compositor::new()
        .render(&store, &registry(), &cache, canvas)
        .unwrap();

    assert_eq!(frame.width, 8);
    assert_eq!(frame.height, 8);
    assert_eq!(frame.pixel(0, 0), Some([248, 249, 250, 255]));
    assert_eq!(frame.pixel(7, 7), Some([248, 249, 250, 255]));
}

#[test]
fn custom_background_is_respected() {
    let store = PartStore::new();
    let cache = SvgAssetCache::new("does-not-exist");
    let canvas = CanvasSize::new(4, 4).unwrap();

    let frame = Compositor::new()
        .with_background([10, 20, 30])
        .render(&store, &registry(), &cache, canvas)
        .unwrap();

    assert_eq!(frame.pixel(2, 2), Some([10, 20, 30, 255]));
}

#[test]
fn unresolvable_parts_degrade_to_the_background() {
    let registry = registry();
    let mut store = PartStore::new();
    store.set_part(&registry, "nose", "1").unwrap();

    // The cache root holds no artwork, so the one part is skipped.
    let cache = SvgAssetCache::new("does-not-exist");
    let canvas = CanvasSize::new(8, 8).unwrap();
    let frame = Compositor::new()
        .render(&store, &registry, &cache, canvas)
        .unwrap();

    assert_eq!(frame.pixel(4, 4), Some([248, 249, 250, 255]));
}

#[test]
fn skia_transform_preserves_affine_coefficients() {
    let affine = Affine::translate(crate::foundation::core::Vec2::new(5.0, -3.0))
        * Affine::scale_non_uniform(2.0, 0.5);
    let t = skia_transform(affine);

    assert_eq!(t.sx, 2.0);
    assert_eq!(t.sy, 0.5);
    assert_eq!(t.tx, 5.0);
    assert_eq!(t.ty, -3.0);
    assert_eq!(t.kx, 0.0);
    assert_eq!(t.ky, 0.0);
}
