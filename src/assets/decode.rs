use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::FacetteResult;

/// Parsed part artwork plus its intrinsic pixel size.
#[derive(Clone, Debug)]
pub struct PreparedPartSvg {
    /// Parsed SVG tree.
    pub tree: Arc<usvg::Tree>,
    /// Intrinsic width in pixels.
    pub width: f64,
    /// Intrinsic height in pixels.
    pub height: f64,
}

/// Parse SVG bytes into a prepared tree.
pub fn parse_svg(bytes: &[u8]) -> FacetteResult<PreparedPartSvg> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    let size = tree.size();
    Ok(PreparedPartSvg {
        width: f64::from(size.width()),
        height: f64::from(size.height()),
        tree: Arc::new(tree),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
