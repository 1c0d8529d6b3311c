use std::f64::consts::TAU;

use tracing::debug;

use crate::error::Result;
use crate::math::Axis;
use crate::operations::transform::Rotate;
use crate::topology::Face;

/// Duplicates a face around an axis in equal angular steps.
///
/// With `step = 2π / copies`, copy `i` is the original rotated by
/// `(i + 1) * step`, so the last copy has turned a full revolution. When
/// `copies` is zero the result is the original face alone.
pub struct RotationalCopy<'a> {
    face: &'a Face,
    copies: usize,
    axis: Axis,
}

impl<'a> RotationalCopy<'a> {
    /// Creates a new `RotationalCopy` operation.
    #[must_use]
    pub fn new(face: &'a Face, copies: usize, axis: Axis) -> Self {
        Self { face, copies, axis }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a rotated face cannot be built.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<Face>> {
        if self.copies == 0 {
            return Ok(vec![self.face.clone()]);
        }

        let step = TAU / self.copies as f64;
        let faces = (1..=self.copies)
            .map(|k| {
                let rotate = Rotate::new(self.axis, k as f64 * step);
                Face::new(rotate.execute(self.face))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(copies = self.copies, axis = ?self.axis, "rotational copy");
        Ok(faces)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;
    use crate::topology::Vertex;

    fn offset_square() -> Face {
        Face::new(vec![
            Vertex::new(1.0, 0.0, 0.5),
            Vertex::new(2.0, 0.0, 0.5),
            Vertex::new(2.0, 1.0, 0.5),
            Vertex::new(1.0, 1.0, 0.5),
        ])
        .unwrap()
    }

    fn coincides(a: &Face, b: &Face) -> bool {
        a.iter()
            .zip(b.iter())
            .all(|(p, q)| (p.point() - q.point()).amax() < TOLERANCE)
    }

    #[test]
    fn zero_copies_returns_original() {
        let face = offset_square();
        let result = RotationalCopy::new(&face, 0, Axis::Z).execute().unwrap();
        assert_eq!(result, vec![face]);
    }

    #[test]
    fn first_copy_is_already_rotated() {
        let face = offset_square();
        let result = RotationalCopy::new(&face, 4, Axis::Z).execute().unwrap();
        assert_eq!(result.len(), 4);
        // Quarter turn: (1, 0) -> (0, 1)
        let v = result[0].vertex(0).unwrap();
        assert_abs_diff_eq!(v.x(), FRAC_PI_2.cos(), epsilon = TOLERANCE);
        assert_abs_diff_eq!(v.y(), 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(v.z(), 0.5, epsilon = TOLERANCE);
    }

    #[test]
    fn intermediate_copies_differ_from_original() {
        let face = offset_square();
        let result = RotationalCopy::new(&face, 6, Axis::Y).execute().unwrap();
        assert_eq!(result.len(), 6);
        for copy in &result[..5] {
            assert!(!coincides(copy, &face));
        }
    }

    #[test]
    fn full_revolution_returns_to_start_about_y_and_z() {
        let face = offset_square();
        for axis in [Axis::Y, Axis::Z] {
            let result = RotationalCopy::new(&face, 5, axis).execute().unwrap();
            assert!(coincides(result.last().unwrap(), &face));
        }
    }

    #[test]
    fn x_axis_revolution_ends_mirrored() {
        // X rotation mirrors z, so a full turn lands on z = -0.5.
        let face = offset_square();
        let result = RotationalCopy::new(&face, 3, Axis::X).execute().unwrap();
        let last = result.last().unwrap();
        for (v, original) in last.iter().zip(face.iter()) {
            assert_abs_diff_eq!(v.x(), original.x(), epsilon = TOLERANCE);
            assert_abs_diff_eq!(v.y(), original.y(), epsilon = TOLERANCE);
            assert_abs_diff_eq!(v.z(), -original.z(), epsilon = TOLERANCE);
        }
    }
}
