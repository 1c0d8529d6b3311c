use tracing::debug;

use crate::error::Result;
use crate::operations::creation::MakeSideFaces;
use crate::operations::transform::Translate;
use crate::topology::Face;

use super::{RegularPolygon, ToFaces};

/// A closed right prism over a regular polygon.
///
/// Flattens to the bottom cap, the top cap, then one side quad per edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prism {
    pub points: usize,
    pub radius: f64,
    pub height: f64,
}

impl Prism {
    #[must_use]
    pub fn new(points: usize, radius: f64, height: f64) -> Self {
        Self {
            points,
            radius,
            height,
        }
    }
}

impl ToFaces for Prism {
    fn to_faces(&self) -> Result<Vec<Face>> {
        let bottom = RegularPolygon::new(self.points, self.radius).ring()?;
        let top = Translate::z(self.height).execute(&bottom);
        let sides = MakeSideFaces::new(&bottom, &top).execute()?;

        let mut faces = Vec::with_capacity(sides.len() + 2);
        faces.push(Face::new(bottom)?);
        faces.push(Face::new(top)?);
        faces.extend(sides);

        debug!(faces = faces.len(), "flattened prism");
        Ok(faces)
    }
}
