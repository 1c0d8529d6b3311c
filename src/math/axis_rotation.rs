//! Per-axis point rotations.
//!
//! Angles are in radians. The X-axis formula negates the `z * cos` term,
//! so it is a rotation followed by a reflection through the XY plane rather
//! than a proper rotation. Existing models depend on that output, so it is
//! kept as is.

use super::{Axis, Point3};

/// Rotates `point` about the X axis by `angle` radians.
///
/// `y' = y cos θ - z sin θ`, `z' = y sin θ - z cos θ`.
#[must_use]
pub fn rotate_about_x(point: &Point3, angle: f64) -> Point3 {
    let (s, c) = angle.sin_cos();
    Point3::new(
        point.x,
        point.y * c - point.z * s,
        point.y * s - point.z * c,
    )
}

/// Rotates `point` about the Y axis by `angle` radians.
#[must_use]
pub fn rotate_about_y(point: &Point3, angle: f64) -> Point3 {
    let (s, c) = angle.sin_cos();
    Point3::new(
        point.x * c + point.z * s,
        point.y,
        -point.x * s + point.z * c,
    )
}

/// Rotates `point` about the Z axis by `angle` radians.
#[must_use]
pub fn rotate_about_z(point: &Point3, angle: f64) -> Point3 {
    let (s, c) = angle.sin_cos();
    Point3::new(
        point.x * c - point.y * s,
        point.x * s + point.y * c,
        point.z,
    )
}

/// Dispatches to the rotation for `axis`.
#[must_use]
pub fn rotate_about(axis: Axis, point: &Point3, angle: f64) -> Point3 {
    match axis {
        Axis::X => rotate_about_x(point, angle),
        Axis::Y => rotate_about_y(point, angle),
        Axis::Z => rotate_about_z(point, angle),
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;

    fn assert_point(actual: Point3, x: f64, y: f64, z: f64) {
        assert_abs_diff_eq!(actual.x, x, epsilon = TOLERANCE);
        assert_abs_diff_eq!(actual.y, y, epsilon = TOLERANCE);
        assert_abs_diff_eq!(actual.z, z, epsilon = TOLERANCE);
    }

    #[test]
    fn z_rotation_quarter_turn() {
        let p = rotate_about_z(&Point3::new(1.0, 0.0, 5.0), FRAC_PI_2);
        assert_point(p, 0.0, 1.0, 5.0);
    }

    #[test]
    fn y_rotation_quarter_turn() {
        let p = rotate_about_y(&Point3::new(1.0, 7.0, 0.0), FRAC_PI_2);
        assert_point(p, 0.0, 7.0, -1.0);
    }

    #[test]
    fn x_rotation_flips_z_at_zero_angle() {
        // Angle zero is not the identity: z is mirrored.
        let p = rotate_about_x(&Point3::new(3.0, 1.0, 2.0), 0.0);
        assert_point(p, 3.0, 1.0, -2.0);
    }

    #[test]
    fn x_rotation_quarter_turn() {
        let p = rotate_about_x(&Point3::new(0.0, 1.0, 2.0), FRAC_PI_2);
        assert_point(p, 0.0, -2.0, 1.0);
    }

    #[test]
    fn angle_is_radians_not_degrees() {
        // 180 here means 180 radians, not a half turn.
        let p = rotate_about_z(&Point3::new(1.0, 0.0, 0.0), 180.0);
        assert_point(p, 180.0_f64.cos(), 180.0_f64.sin(), 0.0);

        let half = rotate_about_z(&Point3::new(1.0, 0.0, 0.0), PI);
        assert_point(half, -1.0, 0.0, 0.0);
    }

    #[test]
    fn dispatch_matches_per_axis_functions() {
        let p = Point3::new(0.3, -1.2, 2.5);
        assert_eq!(rotate_about(Axis::X, &p, 0.7), rotate_about_x(&p, 0.7));
        assert_eq!(rotate_about(Axis::Y, &p, 0.7), rotate_about_y(&p, 0.7));
        assert_eq!(rotate_about(Axis::Z, &p, 0.7), rotate_about_z(&p, 0.7));
    }
}
