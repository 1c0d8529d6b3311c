use std::f64::consts::TAU;

use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::topology::Vertex;

/// Generates the vertex ring of a regular polygon in the `z = 0` plane.
///
/// Vertex `k` (zero-based) sits at angle `(k + 1) * 2π / points`, so the
/// ring starts one step past the positive X axis and the last vertex lands
/// on it.
pub struct MakeRegularPolygon {
    points: usize,
    radius: f64,
}

impl MakeRegularPolygon {
    /// Creates a new `MakeRegularPolygon` operation.
    #[must_use]
    pub fn new(points: usize, radius: f64) -> Self {
        Self { points, radius }
    }

    /// Executes the operation, returning `points` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if `points` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<Vertex>> {
        if self.points < 1 {
            return Err(GeometryError::InvalidGeometry(
                "regular polygon needs at least one point".into(),
            )
            .into());
        }

        let step = TAU / self.points as f64;
        let ring: Vec<Vertex> = (1..=self.points)
            .map(|k| {
                let (s, c) = (k as f64 * step).sin_cos();
                Vertex::new(self.radius * c, self.radius * s, 0.0)
            })
            .collect();

        trace!(
            points = self.points,
            radius = self.radius,
            "generated polygon ring"
        );
        Ok(ring)
    }
}
