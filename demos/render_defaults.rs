use facette::{CanvasSize, Compositor, Manifest, PartStore, SvgAssetCache};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let manifest = Manifest::from_json_str(
        r#"{
            "categories": {
                "outline": { "name": "outline", "parts": [1, 2], "defaultPart": 1, "zIndex": 1 },
                "eye":     { "name": "eye",     "parts": [1, 2, 3], "defaultPart": 1, "zIndex": 5 },
                "nose":    { "name": "nose",    "parts": [1], "defaultPart": 1, "zIndex": 6 }
            }
        }"#,
    )?;
    let registry = manifest.into_registry()?;

    let store = PartStore::with_defaults(&registry);
    let cache = SvgAssetCache::new(std::env::args().nth(1).unwrap_or_else(|| "assets".into()));

    // Missing artwork is skipped with a warning, so this runs even without
    // the asset tree in place. Pass the asset root as the first argument to
    // see a full composite.
    let frame = Compositor::new()
        .with_grid(true)
        .render(&store, &registry, &cache, CanvasSize::default())?;

    println!(
        "rendered {} parts into a {}x{} frame",
        store.len(),
        frame.width,
        frame.height
    );

    Ok(())
}
