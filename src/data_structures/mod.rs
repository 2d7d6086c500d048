pub mod fringe;

pub use fringe::{FringeRecord, FringeSet};
