pub mod face;
pub mod mesh;
pub mod vertex;

pub use face::{Face, MIN_FACE_VERTICES};
pub use mesh::Mesh;
pub use vertex::Vertex;
