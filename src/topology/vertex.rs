use std::fmt;

use crate::math::{Axis, Point3};

/// An immutable point in 3D space.
///
/// Every transform returns a new vertex. Two vertices are equal when their
/// coordinates are equal; there is no other identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    point: Point3,
}

impl Vertex {
    /// Creates a vertex from its coordinates. Non-finite values are kept.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            point: Point3::new(x, y, z),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.point.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.point.z
    }

    /// The underlying position.
    #[must_use]
    pub fn point(&self) -> &Point3 {
        &self.point
    }

    /// Returns a copy offset by `distance` along `axis`.
    #[must_use]
    pub fn moved(&self, axis: Axis, distance: f64) -> Self {
        let mut point = self.point;
        point[axis.index()] += distance;
        Self { point }
    }

    #[must_use]
    pub fn move_x(&self, distance: f64) -> Self {
        self.moved(Axis::X, distance)
    }

    #[must_use]
    pub fn move_y(&self, distance: f64) -> Self {
        self.moved(Axis::Y, distance)
    }

    #[must_use]
    pub fn move_z(&self, distance: f64) -> Self {
        self.moved(Axis::Z, distance)
    }
}

impl From<Point3> for Vertex {
    fn from(point: Point3) -> Self {
        Self { point }
    }
}

/// Writes the coordinate record `x y z`, always with a decimal point.
impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} {:?}", self.x(), self.y(), self.z())
    }
}
