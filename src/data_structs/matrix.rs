//! Binary methylation matrix for one amplicon.
//!
//! Rows come from aligned CpG strings over the alphabet `{'.', 'G'}`
//! (`'.'` = unmethylated, `'G'` = methylated). The matrix owns the
//! post-filter rows of one run and is responsible for the stable row-sum
//! sort, presentation truncation, aggregate statistics, and (where the
//! amplicon defines them) classification counts.

use std::fmt;

use itertools::Itertools;
use ndarray::Array2;

use super::amplicon::{AmpliconSchema, MethylationClass};
use super::stats::{ClassificationStats, MatrixStats};

/// Character marking an unmethylated CpG site in aligned input.
pub const UNMETHYLATED_CHAR: char = '.';
/// Character marking a methylated CpG site in aligned input.
pub const METHYLATED_CHAR: char = 'G';

/// Reason a row was rejected during filtering. Non-fatal: callers log it
/// and continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowDefect {
    /// Character outside `{'.', 'G'}`.
    Alphabet { index: usize, found: char },
    /// Decoded length differs from the amplicon's CpG-site count.
    Length { expected: usize, actual: usize },
}

impl fmt::Display for RowDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowDefect::Alphabet { index, found } => {
                write!(f, "invalid character {found:?} at column {index}")
            },
            RowDefect::Length { expected, actual } => {
                write!(f, "expected {expected} CpG sites but got {actual}")
            },
        }
    }
}

/// Decodes one aligned line into binary calls.
///
/// The whole line is checked against the alphabet before the length, so an
/// alphabet violation is reported even when the length also differs.
pub fn decode_row(line: &str, expected: usize) -> Result<Vec<u8>, RowDefect> {
    let mut calls = Vec::with_capacity(expected);
    for (index, ch) in line.chars().enumerate() {
        match ch {
            UNMETHYLATED_CHAR => calls.push(0),
            METHYLATED_CHAR => calls.push(1),
            found => return Err(RowDefect::Alphabet { index, found }),
        }
    }
    if calls.len() != expected {
        return Err(RowDefect::Length {
            expected,
            actual: calls.len(),
        });
    }
    Ok(calls)
}

/// Re-encodes binary calls as an aligned line. Inverse of [`decode_row`].
pub fn encode_row(calls: &[u8]) -> String {
    calls
        .iter()
        .map(|&call| {
            if call == 0 {
                UNMETHYLATED_CHAR
            } else {
                METHYLATED_CHAR
            }
        })
        .collect()
}

/// Post-filter methylation matrix of one aligned CpG file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethylationMatrix {
    schema: &'static AmpliconSchema,
    rows: Vec<Vec<u8>>,
}

impl MethylationMatrix {
    /// Wraps already-decoded rows. Every row must have the schema's
    /// CpG-site count; filtering happens upstream in `io::aligned`.
    pub fn new(schema: &'static AmpliconSchema, rows: Vec<Vec<u8>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == schema.cpg_sites));
        Self { schema, rows }
    }

    pub fn schema(&self) -> &'static AmpliconSchema {
        self.schema
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorts rows ascending by row sum. The sort is stable: rows with equal
    /// sums keep their original relative order, so repeated sorting is
    /// idempotent.
    pub fn sort_by_row_sum(&mut self) {
        self.rows
            .sort_by_cached_key(|row| row.iter().map(|&call| call as usize).sum::<usize>());
    }

    /// Keeps only the first `count` rows.
    pub fn truncate(&mut self, count: usize) {
        self.rows.truncate(count);
    }

    /// Number of methylated calls in one row.
    fn row_sum(row: &[u8]) -> usize {
        row.iter().map(|&call| call as usize).sum()
    }

    /// Total methylated calls across the matrix.
    pub fn methylated_cells(&self) -> u64 {
        self.rows
            .iter()
            .map(|row| Self::row_sum(row) as u64)
            .sum()
    }

    /// Total cells (rows × CpG sites).
    pub fn total_cells(&self) -> u64 {
        self.rows.len() as u64 * self.schema.cpg_sites as u64
    }

    /// Aggregate statistics of the current rows, including classification
    /// counts when the amplicon defines buckets.
    ///
    /// A zero-row matrix yields 0.0 percent rather than a NaN.
    pub fn stats(&self) -> MatrixStats {
        let count_methylation = self.methylated_cells();
        let total_sites = self.total_cells();
        let percent_methylation = if total_sites > 0 {
            count_methylation as f64 / total_sites as f64 * 100.0
        } else {
            0.0
        };

        MatrixStats {
            percent_methylation,
            count_methylation,
            total_sites,
            classification: self.classification(),
        }
    }

    /// Bucket counts and percentages, for amplicons with classification
    /// bounds. Buckets partition the rows exactly.
    pub fn classification(&self) -> Option<ClassificationStats> {
        self.schema.classes?;

        let mut fully = 0u64;
        let mut partially = 0u64;
        let mut unmethylated = 0u64;
        for row in &self.rows {
            // classify() is Some for every row sum once bounds exist
            match self.schema.classify(Self::row_sum(row))? {
                MethylationClass::Fully => fully += 1,
                MethylationClass::Partially => partially += 1,
                MethylationClass::Unmethylated => unmethylated += 1,
            }
        }

        let total_rows = self.rows.len() as u64;
        let percent_of = |count: u64| {
            if total_rows > 0 {
                count as f64 / total_rows as f64 * 100.0
            } else {
                0.0
            }
        };

        Some(ClassificationStats {
            percent_fully_methylated: percent_of(fully),
            percent_partially_methylated: percent_of(partially),
            percent_unmethylated: percent_of(unmethylated),
            total_rows,
            count_fully_methylated: fully,
            count_partially_methylated: partially,
            count_unmethylated: unmethylated,
        })
    }

    /// Exports the rows as a dense 2-D array for rendering.
    pub fn to_array(&self) -> Array2<u8> {
        let flat = self.rows.iter().flatten().copied().collect_vec();
        Array2::from_shape_vec((self.rows.len(), self.schema.cpg_sites), flat)
            .expect("row lengths are enforced at construction")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn amp(id: u8) -> &'static AmpliconSchema {
        AmpliconSchema::from_id(id).unwrap()
    }

    #[test]
    fn decode_scenario_b_row() {
        assert_eq!(decode_row("....", 4), Ok(vec![0, 0, 0, 0]));
        // Amplicon 4 expects 5 sites, so the same row is a length defect
        // against the real schema.
        assert_eq!(
            decode_row("....", amp(4).cpg_sites),
            Err(RowDefect::Length {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        assert_eq!(
            decode_row(".GX.G", 5),
            Err(RowDefect::Alphabet {
                index: 2,
                found: 'X'
            })
        );
    }

    #[rstest]
    #[case("GGGGG")]
    #[case(".....")]
    #[case(".G.G.")]
    fn decode_encode_round_trip(#[case] line: &str) {
        let calls = decode_row(line, line.len()).unwrap();
        assert_eq!(encode_row(&calls), line);
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        // Two distinct rows with equal sums keep their relative order.
        let rows = vec![
            vec![1, 1, 1, 1, 1],
            vec![0, 1, 1, 0, 0],
            vec![1, 1, 0, 0, 0],
            vec![0, 0, 0, 0, 0],
        ];
        let mut matrix = MethylationMatrix::new(amp(4), rows);
        matrix.sort_by_row_sum();
        let sorted = matrix.rows().to_vec();
        assert_eq!(
            sorted,
            vec![
                vec![0, 0, 0, 0, 0],
                vec![0, 1, 1, 0, 0],
                vec![1, 1, 0, 0, 0],
                vec![1, 1, 1, 1, 1],
            ]
        );

        matrix.sort_by_row_sum();
        assert_eq!(matrix.rows(), sorted.as_slice());
    }

    #[test]
    fn truncate_keeps_first_rows() {
        let mut matrix = MethylationMatrix::new(
            amp(4),
            vec![vec![0, 0, 0, 0, 0], vec![1, 0, 0, 0, 0], vec![1, 1, 0, 0, 0]],
        );
        matrix.truncate(2);
        assert_eq!(matrix.n_rows(), 2);
        assert_eq!(matrix.rows()[1], vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn aggregate_stats() {
        let matrix = MethylationMatrix::new(
            amp(4),
            vec![vec![1, 1, 1, 1, 1], vec![0, 0, 0, 0, 0]],
        );
        let stats = matrix.stats();
        assert_eq!(stats.count_methylation, 5);
        assert_eq!(stats.total_sites, 10);
        assert_approx_eq::assert_approx_eq!(stats.percent_methylation, 50.0);
        assert!(stats.classification.is_none());
    }

    #[test]
    fn empty_matrix_stats_are_zero() {
        let matrix = MethylationMatrix::new(amp(4), vec![]);
        let stats = matrix.stats();
        assert_eq!(stats.total_sites, 0);
        assert_eq!(stats.count_methylation, 0);
        assert_eq!(stats.percent_methylation, 0.0);
    }

    #[test]
    fn classification_partitions_rows() {
        let rows = vec![
            vec![1; 11],                               // fully
            vec![1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],     // partially (3)
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],     // partially (10)
            vec![1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],     // unmethylated (2)
            vec![0; 11],                               // unmethylated (0)
        ];
        let matrix = MethylationMatrix::new(amp(3), rows);
        let class = matrix.classification().unwrap();
        assert_eq!(class.count_fully_methylated, 1);
        assert_eq!(class.count_partially_methylated, 2);
        assert_eq!(class.count_unmethylated, 2);
        assert_eq!(class.total_rows, 5);
        assert_eq!(
            class.count_fully_methylated
                + class.count_partially_methylated
                + class.count_unmethylated,
            class.total_rows
        );
        assert_approx_eq::assert_approx_eq!(class.percent_fully_methylated, 20.0);
        assert_approx_eq::assert_approx_eq!(class.percent_partially_methylated, 40.0);
        assert_approx_eq::assert_approx_eq!(class.percent_unmethylated, 40.0);
    }

    #[test]
    fn array_export_preserves_shape() {
        let matrix = MethylationMatrix::new(
            amp(4),
            vec![vec![0, 1, 0, 1, 0], vec![1, 1, 1, 1, 1]],
        );
        let array = matrix.to_array();
        assert_eq!(array.dim(), (2, 5));
        assert_eq!(array[[0, 1]], 1);
        assert_eq!(array[[1, 4]], 1);
    }
}
