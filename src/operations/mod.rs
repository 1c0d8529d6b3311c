pub mod creation;
pub mod pattern;
pub mod transform;
