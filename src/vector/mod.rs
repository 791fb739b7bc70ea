//! Vector Module
//!
//! Embedding vectors and the numeric kernels behind them.

mod embedding;
mod similarity;

pub use embedding::Vector;
pub use similarity::{dot_product, magnitude, normalized};
