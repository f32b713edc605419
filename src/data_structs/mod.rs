//! Core data structures: the amplicon schema registry, the binary
//! methylation matrix, and the serializable statistics payloads.

pub mod amplicon;
pub mod matrix;
pub mod stats;

pub use amplicon::{AmpliconSchema, MethylationClass};
pub use matrix::MethylationMatrix;
pub use stats::{ClassificationStats, MatrixStats};
