//! Gzip-compressed variant input.
//!
//! The extractor only needs the filtered record lines: header lines
//! (starting with `#`) and blank lines are dropped here. Original 1-based
//! line numbers are kept alongside each record so diagnostics can point at
//! the real file location.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::Result;

/// Reads all non-header, non-blank lines of a gzip-compressed VCF, paired
/// with their 1-based line numbers.
pub fn read_variant_lines(path: &Path) -> Result<Vec<(usize, String)>> {
    let decoder = MultiGzDecoder::new(File::open(path)?);
    let reader = BufReader::new(decoder);

    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push((index + 1, trimmed.to_string()));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    fn write_gz(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap();
        file
    }

    #[test]
    fn headers_and_blank_lines_are_skipped() {
        let file = write_gz(
            "##fileformat=VCFv4.2\n#CHROM\tPOS\n\nchr1\t10\tGT:AD\t0/1:3,7\nchr1\t20\tGT:AD\t0/1:1,1\n",
        );
        let lines = read_variant_lines(file.path()).unwrap();
        assert_eq!(lines.len(), 2);
        // Line numbers refer to the original file, headers included.
        assert_eq!(lines[0].0, 4);
        assert!(lines[0].1.starts_with("chr1\t10"));
        assert_eq!(lines[1].0, 5);
    }

    #[test]
    fn empty_archive_yields_no_lines() {
        let file = write_gz("");
        assert!(read_variant_lines(file.path()).unwrap().is_empty());
    }
}
