//! Serializable statistics payloads for the matrix analyzer.
//!
//! Field names match the JSON keys of the stats artifact consumed
//! downstream, so the structs serialize directly with `serde_json`.

use serde::{Deserialize, Serialize};

/// Aggregate methylation statistics of a sorted/truncated matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixStats {
    /// Methylated cells as a percentage of all cells.
    pub percent_methylation: f64,

    /// Raw methylated-cell count.
    pub count_methylation: u64,

    /// Total cells (rows × CpG sites).
    pub total_sites: u64,

    /// Bucket statistics, present only for amplicons with classification
    /// bounds. Flattened so the JSON stays a single object.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub classification: Option<ClassificationStats>,
}

/// Three-way row classification of one matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationStats {
    pub percent_fully_methylated: f64,
    pub percent_partially_methylated: f64,
    pub percent_unmethylated: f64,
    pub total_rows: u64,
    pub count_fully_methylated: u64,
    pub count_partially_methylated: u64,
    pub count_unmethylated: u64,
}
