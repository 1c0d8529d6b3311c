use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::topology::{Face, Vertex};

/// Stitches quadrilateral side faces between two vertex rings.
///
/// Face `i` is `[bottom[i], bottom[i+1], top[i+1], top[i]]`, with the last
/// face wrapping back to index 0 to close the ring.
pub struct MakeSideFaces<'a> {
    bottom: &'a [Vertex],
    top: &'a [Vertex],
}

impl<'a> MakeSideFaces<'a> {
    /// Creates a new `MakeSideFaces` operation.
    #[must_use]
    pub fn new(bottom: &'a [Vertex], top: &'a [Vertex]) -> Self {
        Self { bottom, top }
    }

    /// Executes the operation, returning one quad per ring vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if the rings differ in length.
    pub fn execute(&self) -> Result<Vec<Face>> {
        if self.bottom.len() != self.top.len() {
            return Err(GeometryError::InvalidGeometry(format!(
                "ring lengths differ: bottom has {}, top has {}",
                self.bottom.len(),
                self.top.len()
            ))
            .into());
        }

        let n = self.bottom.len();
        let mut faces = Vec::with_capacity(n);
        for i in 0..n {
            let j = (i + 1) % n;
            faces.push(Face::new(vec![
                self.bottom[i],
                self.bottom[j],
                self.top[j],
                self.top[i],
            ])?);
        }

        trace!(sides = n, "stitched side faces");
        Ok(faces)
    }
}
