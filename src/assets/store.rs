use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, OnceLock, PoisonError, atomic::AtomicUsize, atomic::Ordering},
};

use rayon::prelude::*;

use crate::{
    assets::decode::{PreparedPartSvg, parse_svg},
    foundation::error::{FacetteError, FacetteResult},
    registry::category::{Category, PartRegistry},
    state::part::PlacedPart,
};

/// Prefetch resolves assets in bounded batches of this many paths.
const PREFETCH_BATCH: usize = 10;

/// Relative artwork path for a `(folder, id)` pair: `folder/folder_007.svg`.
pub fn part_rel_path(folder: &str, id: i64) -> String {
    format!("{folder}/{folder}_{id:03}.svg")
}

/// Memoizing cache of parsed part artwork, keyed by normalized relative path.
///
/// Each key is backed by a one-shot cell: the first request parses and
/// populates it while concurrent requests for the same key block on that
/// in-flight result instead of re-reading the file. Lookups after the first
/// are lock-cheap clones of the prepared tree.
#[derive(Debug)]
pub struct SvgAssetCache {
    root: PathBuf,
    entries: Mutex<HashMap<String, Arc<OnceLock<Result<Arc<PreparedPartSvg>, String>>>>>,
    decode_counts: Mutex<HashMap<String, u64>>,
}

impl SvgAssetCache {
    /// Cache rooted at the artwork directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Mutex::new(HashMap::new()),
            decode_counts: Mutex::new(HashMap::new()),
        }
    }

    /// Root directory used to resolve relative artwork paths.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fetch (or reuse) the prepared artwork at `source`.
    pub fn get(&self, source: &str) -> FacetteResult<Arc<PreparedPartSvg>> {
        let norm = normalize_rel_path(source)?;

        let cell = {
            let mut entries = self
                .entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            entries.entry(norm.clone()).or_default().clone()
        };

        let outcome = cell.get_or_init(|| {
            {
                let mut counts = self
                    .decode_counts
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                *counts.entry(norm.clone()).or_insert(0) += 1;
            }

            let path = self.root.join(Path::new(&norm));
            let bytes = match std::fs::read(&path) {
                Ok(bytes) => bytes,
                Err(e) => return Err(format!("read '{}': {e}", path.display())),
            };
            match parse_svg(&bytes) {
                Ok(prepared) => Ok(Arc::new(prepared)),
                Err(e) => Err(format!("parse '{}': {e}", path.display())),
            }
        });

        match outcome {
            Ok(prepared) => {
                tracing::debug!(path = norm, "asset cache hit");
                Ok(Arc::clone(prepared))
            }
            Err(msg) => Err(FacetteError::asset(msg.clone())),
        }
    }

    /// Prepared artwork for one placed part.
    pub fn get_part(
        &self,
        category: &Category,
        part: &PlacedPart,
    ) -> FacetteResult<Arc<PreparedPartSvg>> {
        let id = part.part_number().ok_or_else(|| {
            FacetteError::asset(format!(
                "part id '{}' in category '{}' is not numeric",
                part.id, part.category
            ))
        })?;
        self.get(&part_rel_path(category.folder_name(), id))
    }

    /// Times the asset at `source` was actually parsed (test observability).
    pub fn decode_count(&self, source: &str) -> u64 {
        let Ok(norm) = normalize_rel_path(source) else {
            return 0;
        };
        self.decode_counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&norm)
            .copied()
            .unwrap_or(0)
    }

    /// Warm the cache for every `(category, id)` in the registry.
    ///
    /// Paths are resolved in bounded-parallel batches; a missing asset is
    /// logged and skipped. Returns the number of assets resolved.
    pub fn prefetch(&self, registry: &PartRegistry) -> usize {
        let mut paths = Vec::new();
        for (_, category) in registry.iter() {
            for &id in &category.valid_ids {
                if id != 0 {
                    paths.push(part_rel_path(category.folder_name(), id));
                }
            }
        }
        paths.sort();
        paths.dedup();

        let resolved = AtomicUsize::new(0);
        paths.par_chunks(PREFETCH_BATCH).for_each(|batch| {
            for path in batch {
                match self.get(path) {
                    Ok(_) => {
                        resolved.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(e) => tracing::warn!(path, error = %e, "prefetch skipped asset"),
                }
            }
        });
        resolved.into_inner()
    }
}

/// Normalize and validate cache-relative artwork paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and
/// rejects absolute paths or parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> FacetteResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(FacetteError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(FacetteError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(FacetteError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(FacetteError::validation("asset path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
