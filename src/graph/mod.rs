pub mod traits;
pub mod matrix;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use matrix::WeightMatrix;
