mod linear_copy;
mod rotational_copy;

pub use linear_copy::LinearCopy;
pub use rotational_copy::RotationalCopy;
