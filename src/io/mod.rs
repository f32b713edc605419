//! File input and output: variant lines, membership sets, aligned CpG
//! files, and the report/stats writers.

pub mod aligned;
pub mod report;
pub mod vcf;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;

use crate::error::Result;

/// Reads a membership set from a plain-text file, one key per line.
///
/// Membership is purely an inclusion test: order is irrelevant and
/// duplicate lines are harmless.
pub fn read_membership_set(path: &Path) -> Result<HashSet<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut keys = HashSet::new();
    for line in reader.lines() {
        keys.insert(line?.trim().to_string());
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn membership_ignores_order_and_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "200\n100\n100\n300").unwrap();

        let set = read_membership_set(file.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("100"));
        assert!(set.contains("300"));
        assert!(!set.contains("400"));
    }
}
