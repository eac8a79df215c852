//! Rasterization of a part store into RGBA frames.

pub mod compositor;
pub mod grid;
pub mod png;
