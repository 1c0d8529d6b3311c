use crate::error::Result;
use crate::shapes::ToFaces;

use super::face::Face;

/// An ordered collection of faces ready for export.
///
/// Face order decides the vertex index ranges assigned on export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mesh by flattening each shape in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while flattening a shape.
    pub fn from_shapes(shapes: &[&dyn ToFaces]) -> Result<Self> {
        let mut mesh = Self::new();
        for shape in shapes {
            mesh.extend(shape.to_faces()?);
        }
        Ok(mesh)
    }

    pub fn push(&mut self, face: Face) {
        self.faces.push(face);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Total vertex count across all faces.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.faces.iter().map(Face::len).sum()
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[must_use]
    pub fn into_faces(self) -> Vec<Face> {
        self.faces
    }
}

impl Extend<Face> for Mesh {
    fn extend<I: IntoIterator<Item = Face>>(&mut self, iter: I) {
        self.faces.extend(iter);
    }
}

impl FromIterator<Face> for Mesh {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        Self {
            faces: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Face>> for Mesh {
    fn from(faces: Vec<Face>) -> Self {
        Self { faces }
    }
}

impl AsRef<[Face]> for Mesh {
    fn as_ref(&self) -> &[Face] {
        &self.faces
    }
}
