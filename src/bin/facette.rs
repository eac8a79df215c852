use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "facette", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a portrait and write it as a PNG.
    Render(RenderArgs),
    /// Write a portrait bundle (PNG + coordinate document).
    Export(ExportArgs),
    /// Warm the asset cache for every part in the manifest.
    Prefetch(PrefetchArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Part catalog manifest JSON.
    #[arg(long)]
    manifest: PathBuf,

    /// Root directory of part artwork.
    #[arg(long)]
    assets: PathBuf,

    /// Saved portrait document to restore; defaults to the manifest's
    /// default parts when omitted.
    #[arg(long)]
    doc: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Overlay the coordinate axes on the finished frame.
    #[arg(long, default_value_t = false)]
    grid: bool,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Part catalog manifest JSON.
    #[arg(long)]
    manifest: PathBuf,

    /// Root directory of part artwork.
    #[arg(long)]
    assets: PathBuf,

    /// Saved portrait document to restore; defaults to the manifest's
    /// default parts when omitted.
    #[arg(long)]
    doc: Option<PathBuf>,

    /// Output directory for the bundle.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PrefetchArgs {
    /// Part catalog manifest JSON.
    #[arg(long)]
    manifest: PathBuf,

    /// Root directory of part artwork.
    #[arg(long)]
    assets: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Export(args) => cmd_export(args),
        Command::Prefetch(args) => cmd_prefetch(args),
    }
}

fn load_store(
    manifest: &PathBuf,
    doc: Option<&PathBuf>,
) -> anyhow::Result<(facette::PartRegistry, facette::PartStore)> {
    let registry = facette::Manifest::from_path(manifest)?.into_registry()?;
    let store = match doc {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read document '{}'", path.display()))?;
            let doc = facette::PortraitDocument::from_json_str(&json)?;
            let (store, stats) = facette::from_document(&doc, &registry);
            if stats.repaired + stats.dropped > 0 {
                eprintln!(
                    "cleanup: repaired {}, dropped {}",
                    stats.repaired, stats.dropped
                );
            }
            store
        }
        None => facette::PartStore::with_defaults(&registry),
    };
    Ok((registry, store))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (registry, store) = load_store(&args.manifest, args.doc.as_ref())?;
    let cache = facette::SvgAssetCache::new(&args.assets);

    let frame = facette::Compositor::new().with_grid(args.grid).render(
        &store,
        &registry,
        &cache,
        facette::CanvasSize::default(),
    )?;
    facette::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let (registry, store) = load_store(&args.manifest, args.doc.as_ref())?;
    let cache = facette::SvgAssetCache::new(&args.assets);
    let canvas = facette::CanvasSize::default();

    let frame = facette::Compositor::new().render(&store, &registry, &cache, canvas)?;
    let doc = facette::to_document(&store, &registry, canvas);
    let bundle = facette::write_bundle(&args.out, &frame, &doc)?;

    if bundle.used_fallback {
        eprintln!("output directory unusable, wrote to temp dir instead");
    }
    eprintln!("wrote {}", bundle.png_path.display());
    eprintln!("wrote {}", bundle.json_path.display());
    Ok(())
}

fn cmd_prefetch(args: PrefetchArgs) -> anyhow::Result<()> {
    let registry = facette::Manifest::from_path(&args.manifest)?.into_registry()?;
    let cache = facette::SvgAssetCache::new(&args.assets);

    let resolved = cache.prefetch(&registry);
    let total: usize = registry
        .iter()
        .map(|(_, c)| c.valid_ids.iter().filter(|&&id| id != 0).count())
        .sum();

    eprintln!("resolved {resolved} of {total} assets");
    Ok(())
}
