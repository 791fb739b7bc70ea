//! word2vec - Binary Word Embedding Models
//!
//! Loads models in the word2vec binary format and answers vector, norm
//! and cosine-similarity queries against them.

pub mod batch;
pub mod config;
pub mod error;
pub mod model;
pub mod reduce;
pub mod vector;

pub use batch::score_pairs;
pub use config::{BatchConfig, ReduceConfig};
pub use error::{ModelError, Result};
pub use model::Model;
pub use reduce::{reduce, reduce_files, ReduceStats};
pub use vector::Vector;
