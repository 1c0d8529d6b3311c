use tracing::debug;

use crate::error::Result;
use crate::math::Axis;
use crate::operations::transform::Translate;
use crate::topology::Face;

/// Duplicates a face along an axis in equal steps.
///
/// Each copy is offset by `length / copies` from the previous one, so copy
/// `i` sits `(i + 1)` steps away from the original. The original face is not
/// part of the output, except when `copies` is zero: then the result is the
/// original face alone.
pub struct LinearCopy<'a> {
    face: &'a Face,
    copies: usize,
    length: f64,
    axis: Axis,
}

impl<'a> LinearCopy<'a> {
    /// Creates a new `LinearCopy` operation.
    #[must_use]
    pub fn new(face: &'a Face, copies: usize, length: f64, axis: Axis) -> Self {
        Self {
            face,
            copies,
            length,
            axis,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a copied face cannot be built.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<Face>> {
        if self.copies == 0 {
            return Ok(vec![self.face.clone()]);
        }

        let step = Translate::new(self.axis, self.length / self.copies as f64);
        let mut faces: Vec<Face> = Vec::with_capacity(self.copies);
        for _ in 0..self.copies {
            let previous = faces.last().unwrap_or(self.face);
            let next = Face::new(step.execute(previous.vertices()))?;
            faces.push(next);
        }

        debug!(copies = self.copies, axis = ?self.axis, "linear copy");
        Ok(faces)
    }
}
