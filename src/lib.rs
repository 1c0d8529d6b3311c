pub mod error;
pub mod export;
pub mod math;
pub mod operations;
pub mod shapes;
pub mod topology;

pub use error::{MeshwrightError, Result};
