use crate::error::{GeometryError, Result};

use super::vertex::Vertex;

/// Minimum number of vertices in a face.
pub const MIN_FACE_VERTICES: usize = 3;

/// An ordered polygon.
///
/// Vertex order is the winding order and is preserved by every transform.
/// Faces are read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    vertices: Vec<Vertex>,
}

impl Face {
    /// Creates a face from an ordered vertex sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if fewer than three vertices
    /// are given.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self> {
        if vertices.len() < MIN_FACE_VERTICES {
            return Err(GeometryError::InvalidGeometry(format!(
                "a face needs at least {MIN_FACE_VERTICES} vertices, got {}",
                vertices.len()
            ))
            .into());
        }
        Ok(Self { vertices })
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a face holds at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn vertex(&self, index: usize) -> Result<&Vertex> {
        self.vertices.get(index).ok_or_else(|| {
            GeometryError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            }
            .into()
        })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }
}

impl<'a> IntoIterator for &'a Face {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl TryFrom<Vec<Vertex>> for Face {
    type Error = crate::error::MeshwrightError;

    fn try_from(vertices: Vec<Vertex>) -> Result<Self> {
        Self::new(vertices)
    }
}
