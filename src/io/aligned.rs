//! Aligned CpG file reading: schema validation and row filtering.
//!
//! Line 0 of an aligned file is the schema fingerprint for the declared
//! amplicon; a mismatch aborts before any row is processed. Every later
//! line is filtered independently: rows with foreign characters or the
//! wrong number of CpG sites are dropped with a warning naming the file,
//! the 1-based line number, and the amplicon, and the run continues.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::data_structs::amplicon::AmpliconSchema;
use crate::data_structs::matrix::{decode_row, MethylationMatrix};
use crate::error::{AmplimethError, Result};

/// Reads and validates an aligned CpG file into an (unsorted) matrix.
pub fn read_aligned_matrix(
    path: &Path,
    schema: &'static AmpliconSchema,
) -> Result<MethylationMatrix> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    matrix_from_lines(path, &lines, schema)
}

/// Validation and filtering over already-read lines. `path` is only used
/// in diagnostics.
pub fn matrix_from_lines(
    path: &Path,
    lines: &[String],
    schema: &'static AmpliconSchema,
) -> Result<MethylationMatrix> {
    let Some(first) = lines.first() else {
        return Err(AmplimethError::EmptyInput {
            path: path.to_path_buf(),
        });
    };

    let fingerprint = first.trim();
    if fingerprint != schema.fingerprint {
        return Err(AmplimethError::SchemaMismatch {
            amplicon: schema.id,
            expected: schema.fingerprint.to_string(),
            actual: fingerprint.to_string(),
        });
    }

    let mut rows = Vec::with_capacity(lines.len().saturating_sub(1));
    for (index, line) in lines.iter().enumerate().skip(1) {
        match decode_row(line.trim_end_matches('\n'), schema.cpg_sites) {
            Ok(row) => rows.push(row),
            Err(defect) => {
                warn!(
                    "{}:{}: amplicon {}: {}; row dropped",
                    path.display(),
                    index + 1,
                    schema.id,
                    defect
                );
            },
        }
    }

    Ok(MethylationMatrix::new(schema, rows))
}
