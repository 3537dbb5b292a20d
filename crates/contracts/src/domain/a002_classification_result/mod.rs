pub mod aggregate;

pub use aggregate::{ClassificationResult, ResultField};
