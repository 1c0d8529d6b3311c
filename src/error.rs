use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for mesh construction and export.
#[derive(Debug, Error)]
pub enum MeshwrightError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised while building or querying geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("vertex index {index} is out of range [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised while writing a mesh to storage.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export target is not a directory: {}", path.display())]
    InvalidTarget { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<std::io::Error> for MeshwrightError {
    fn from(err: std::io::Error) -> Self {
        Self::Export(ExportError::Io(err))
    }
}

/// Convenience type alias for results using [`MeshwrightError`].
pub type Result<T> = std::result::Result<T, MeshwrightError>;
