use crate::error::Result;
use crate::operations::creation::MakeRegularPolygon;
use crate::operations::transform::Translate;
use crate::topology::{Face, Vertex};

use super::ToFaces;

/// A flat regular polygon centred on the Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygon {
    /// Number of corners.
    pub points: usize,
    /// Circumradius.
    pub radius: f64,
    /// Height of the polygon's plane above `z = 0`.
    pub elevation: f64,
}

impl RegularPolygon {
    #[must_use]
    pub fn new(points: usize, radius: f64) -> Self {
        Self {
            points,
            radius,
            elevation: 0.0,
        }
    }

    #[must_use]
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// The corner ring at the polygon's elevation.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is zero.
    pub fn ring(&self) -> Result<Vec<Vertex>> {
        let ring = MakeRegularPolygon::new(self.points, self.radius).execute()?;
        Ok(Translate::z(self.elevation).execute(&ring))
    }

    /// The polygon as a single face.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is less than three.
    pub fn face(&self) -> Result<Face> {
        Face::new(self.ring()?)
    }
}

impl ToFaces for RegularPolygon {
    fn to_faces(&self) -> Result<Vec<Face>> {
        Ok(vec![self.face()?])
    }
}
