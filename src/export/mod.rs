//! Mesh serialization to the OBJ-style text format.

mod obj;
mod target;

pub use obj::{encode_obj, save_obj, write_obj};
pub use target::ExportTarget;

/// Header line written before any geometry.
pub const DEFAULT_SIGNATURE: &str = "# meshwright";

/// Suffix appended to the target's base name.
pub const DEFAULT_EXTENSION: &str = ".obj";

/// Parameters controlling export output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportParams {
    /// Literal first line of every non-empty export.
    pub signature: String,
    /// File suffix, including the leading dot.
    pub extension: String,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            signature: DEFAULT_SIGNATURE.to_owned(),
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}
