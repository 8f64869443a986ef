pub mod area;
pub mod cli;
pub mod demo;
pub mod matrix;

pub use int_vector;
pub use int_vector::{IntVector, IntVectorError};
pub use matrix::{IntMatrix, MatrixError};
