/// Convenience result type used across Facette.
pub type FacetteResult<T> = Result<T, FacetteError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Asset- and record-level failures are contained at per-part granularity by
/// the renderer and exporter; only registry/document-level failures surface
/// through these variants to callers.
#[derive(thiserror::Error, Debug)]
pub enum FacetteError {
    /// Failure loading or validating the part-catalog manifest.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// A part image could not be located or parsed.
    #[error("asset error: {0}")]
    Asset(String),

    /// Invalid user-provided or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failure persisting a composed portrait or its coordinate document.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FacetteError {
    /// Build a [`FacetteError::Manifest`] value.
    pub fn manifest(msg: impl Into<String>) -> Self {
        Self::Manifest(msg.into())
    }

    /// Build a [`FacetteError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`FacetteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FacetteError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`FacetteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
