use crate::math::axis_rotation::rotate_about;
use crate::math::Axis;
use crate::topology::{Face, Vertex};

/// Rotates the vertices of a face about a principal axis.
///
/// The angle is taken in radians. X-axis rotation uses the formula in
/// [`rotate_about_x`](crate::math::axis_rotation::rotate_about_x), which
/// mirrors Z.
pub struct Rotate {
    axis: Axis,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(axis: Axis, angle: f64) -> Self {
        Self { axis, angle }
    }

    #[must_use]
    pub fn x(angle: f64) -> Self {
        Self::new(Axis::X, angle)
    }

    #[must_use]
    pub fn y(angle: f64) -> Self {
        Self::new(Axis::Y, angle)
    }

    #[must_use]
    pub fn z(angle: f64) -> Self {
        Self::new(Axis::Z, angle)
    }

    /// Returns the rotated vertices in the face's order. The face is untouched.
    #[must_use]
    pub fn execute(&self, face: &Face) -> Vec<Vertex> {
        face.iter()
            .map(|v| Vertex::from(rotate_about(self.axis, v.point(), self.angle)))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;

    fn face() -> Face {
        Face::new(vec![
            Vertex::new(1.0, 0.0, 0.0),
            Vertex::new(2.0, 0.0, 1.0),
            Vertex::new(2.0, 1.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn rotate_90_around_z() {
        let rotated = Rotate::z(FRAC_PI_2).execute(&face());
        assert_eq!(rotated.len(), 3);
        // (1, 0, 0) -> (0, 1, 0), (2, 1, 2) -> (-1, 2, 2)
        assert_abs_diff_eq!(rotated[0].x(), 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(rotated[0].y(), 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(rotated[2].x(), -1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(rotated[2].y(), 2.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(rotated[2].z(), 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn rotate_90_around_y() {
        let rotated = Rotate::y(FRAC_PI_2).execute(&face());
        // (2, 0, 1) -> (1, 0, -2)
        assert_abs_diff_eq!(rotated[1].x(), 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(rotated[1].y(), 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(rotated[1].z(), -2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn x_rotation_mirrors_z_term() {
        // Intentional: z' = y sin θ - z cos θ, so a zero angle flips z.
        let rotated = Rotate::x(0.0).execute(&face());
        assert_eq!(rotated[2], Vertex::new(2.0, 1.0, -2.0));
        assert_eq!(rotated[1], Vertex::new(2.0, 0.0, -1.0));
    }

    #[test]
    fn angle_is_used_as_radians() {
        let rotated = Rotate::z(90.0).execute(&face());
        assert_abs_diff_eq!(rotated[0].x(), 90.0_f64.cos(), epsilon = TOLERANCE);
        assert_abs_diff_eq!(rotated[0].y(), 90.0_f64.sin(), epsilon = TOLERANCE);
    }

    #[test]
    fn input_face_is_unchanged() {
        let original = face();
        let snapshot = original.clone();
        let _ = Rotate::new(Axis::Y, 1.3).execute(&original);
        assert_eq!(original, snapshot);
    }
}
