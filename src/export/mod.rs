//! Absolute-coordinate document export and local bundle writing.

pub mod bundle;
pub mod document;
