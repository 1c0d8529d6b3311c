use crate::math::Axis;
use crate::topology::Vertex;

/// Copies vertices with an offset along a principal axis.
pub struct Translate {
    axis: Axis,
    distance: f64,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(axis: Axis, distance: f64) -> Self {
        Self { axis, distance }
    }

    #[must_use]
    pub fn x(distance: f64) -> Self {
        Self::new(Axis::X, distance)
    }

    #[must_use]
    pub fn y(distance: f64) -> Self {
        Self::new(Axis::Y, distance)
    }

    #[must_use]
    pub fn z(distance: f64) -> Self {
        Self::new(Axis::Z, distance)
    }

    /// Returns the offset copies in input order.
    #[must_use]
    pub fn execute(&self, vertices: &[Vertex]) -> Vec<Vertex> {
        vertices
            .iter()
            .map(|v| v.moved(self.axis, self.distance))
            .collect()
    }
}
