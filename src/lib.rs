pub mod error;
pub mod geometry;
pub mod harness;
pub mod intersect;
pub mod math;

pub use error::{Result, SegsectError};
