use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Utc};

use crate::{
    export::document::PortraitDocument,
    foundation::core::FrameRGBA,
    foundation::error::{FacetteError, FacetteResult},
    render::png,
};

/// Where a bundle landed on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportBundle {
    /// Written portrait bitmap.
    pub png_path: PathBuf,
    /// Written portrait document.
    pub json_path: PathBuf,
    /// True when the requested directory was unusable and the bundle went
    /// to the system temp dir instead.
    pub used_fallback: bool,
}

/// Filesystem-safe timestamp used in bundle file names,
/// `2026-08-30T12-34-56`.
pub fn export_stamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// Write `portrait_{stamp}.png` and `portrait_data_{stamp}.json` into `dir`.
///
/// If `dir` cannot be created or written, the bundle falls back to a
/// `facette_exports` directory under the system temp dir so an export is
/// never silently lost; the returned paths say where it actually went.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn write_bundle(
    dir: &Path,
    frame: &FrameRGBA,
    doc: &PortraitDocument,
) -> FacetteResult<ExportBundle> {
    let stamp = export_stamp(doc.timestamp);

    match try_write(dir, &stamp, frame, doc) {
        Ok(bundle) => Ok(bundle),
        Err(e) => {
            let fallback = std::env::temp_dir().join("facette_exports");
            tracing::warn!(
                error = %e,
                fallback = %fallback.display(),
                "export directory unusable, writing to temp dir"
            );
            let mut bundle = try_write(&fallback, &stamp, frame, doc).map_err(|e2| {
                FacetteError::export(format!(
                    "bundle write failed: {e}; temp-dir fallback also failed: {e2}"
                ))
            })?;
            bundle.used_fallback = true;
            Ok(bundle)
        }
    }
}

fn try_write(
    dir: &Path,
    stamp: &str,
    frame: &FrameRGBA,
    doc: &PortraitDocument,
) -> FacetteResult<ExportBundle> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create export dir '{}'", dir.display()))?;

    let png_path = dir.join(format!("portrait_{stamp}.png"));
    let json_path = dir.join(format!("portrait_data_{stamp}.json"));

    png::write_png(frame, &png_path)?;
    std::fs::write(&json_path, doc.to_json_string()?)
        .with_context(|| format!("write document '{}'", json_path.display()))?;

    Ok(ExportBundle {
        png_path,
        json_path,
        used_fallback: false,
    })
}
