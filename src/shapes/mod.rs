//! Named shapes that flatten into an ordered face sequence.

mod prism;
mod regular_polygon;

pub use prism::Prism;
pub use regular_polygon::RegularPolygon;

use crate::error::Result;
use crate::topology::Face;

/// A shape that can be flattened into faces for export.
pub trait ToFaces {
    /// Returns the shape's faces in emission order.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape's parameters do not describe valid
    /// geometry.
    fn to_faces(&self) -> Result<Vec<Face>>;
}

impl ToFaces for Face {
    fn to_faces(&self) -> Result<Vec<Face>> {
        Ok(vec![self.clone()])
    }
}

impl ToFaces for Vec<Face> {
    fn to_faces(&self) -> Result<Vec<Face>> {
        Ok(self.clone())
    }
}
