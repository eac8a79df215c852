//! Facette is a 2D portrait composition engine.
//!
//! Facette turns a manifest of part categories plus a store of placed parts
//! (`PartStore`) into pixels (`FrameRGBA`) and into a portable coordinate
//! document (`PortraitDocument`) via one shared transform pipeline.
//!
//! # Pipeline overview
//!
//! 1. **Load**: manifest JSON -> [`PartRegistry`] (categories, ids, paint order)
//! 2. **Edit**: [`Edit`] commands mutate the [`PartStore`], with symmetry
//!    pairs kept coherent by construction
//! 3. **Render**: store -> [`FrameRGBA`] through the [`Compositor`] (CPU,
//!    resvg rasterization)
//! 4. **Export**: store -> [`PortraitDocument`] with absolute canvas
//!    coordinates, restorable losslessly
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **One transform pipeline**: render and export share the same placement
//!   arithmetic in [`transform::pipeline`], so a rendered part and its
//!   exported `finalX`/`finalY` can never disagree.
//! - **Containment**: a broken part record or missing asset degrades that
//!   one part, never the whole render or export.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assets;
mod export;
mod foundation;
mod registry;
mod render;
mod state;

/// Shared placement arithmetic used by both render and export.
pub mod transform;

pub use assets::decode::{PreparedPartSvg, parse_svg};
pub use assets::store::{SvgAssetCache, normalize_rel_path, part_rel_path};
pub use export::bundle::{ExportBundle, export_stamp, write_bundle};
pub use export::document::{
    CoordinateSystem, ExportedPart, OffsetXY, PortraitDocument, SymmetryInfo, from_document,
    to_document,
};
pub use foundation::core::{Affine, CanvasSize, FrameRGBA, Point, Vec2};
pub use foundation::error::{FacetteError, FacetteResult};
pub use registry::category::{Category, PartRegistry};
pub use registry::config;
pub use registry::manifest::{Manifest, ManifestCategory};
pub use render::compositor::{BACKGROUND_RGB, Compositor};
pub use render::grid::grid_markup;
pub use render::png::{encode_png, write_png};
pub use state::edit::{Edit, TransformField};
pub use state::part::{PlacedPart, Side, base_category, slot_key};
pub use state::store::{CleanupStats, PartStore};
