//! Output artifacts: the counts report (TSV) and the matrix stats (JSON).

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::data_structs::stats::MatrixStats;
use crate::error::Result;
use crate::extract::TargetCount;

/// Writes the counts report: a (Total_Reads, Conversion_Rate) block
/// followed by a (Base, Num_UnMethylated, Num_Methylated) block with one
/// target row per line. Header strings match the legacy report consumed
/// downstream.
pub fn write_counts_report<W: Write>(
    mut writer: W,
    total_reads: u64,
    conversion_rate: f64,
    targets: &[TargetCount],
) -> Result<()> {
    writeln!(writer, "Total_Reads\tConversion_Rate")?;
    writeln!(writer, "{total_reads}\t{conversion_rate:.2}")?;
    writeln!(writer, "Base\tNum_UnMethylated_(G->A)\tNum_Methylated_(G)")?;
    for target in targets {
        writeln!(writer, "{target}")?;
    }
    Ok(())
}

/// Serializes matrix statistics as a single JSON object.
pub fn write_matrix_stats<W: Write>(writer: W, stats: &MatrixStats) -> Result<()> {
    serde_json::to_writer(writer, stats)?;
    Ok(())
}

/// Derives the counts-report path from the variant input path:
/// `sample.vcf.gz` becomes `sample.counts.tsv`.
pub fn counts_report_path(vcf_path: &Path) -> PathBuf {
    let name = vcf_path.to_string_lossy();
    let stem = name.strip_suffix(".vcf.gz").unwrap_or(&name);
    PathBuf::from(format!("{stem}.counts.tsv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_report_layout() {
        let targets = vec![
            TargetCount {
                position: "1042".into(),
                unmethylated: "3".into(),
                methylated: "7".into(),
            },
            TargetCount {
                position: "2001".into(),
                unmethylated: "10".into(),
                methylated: "0".into(),
            },
        ];
        let mut buffer = Vec::new();
        write_counts_report(&mut buffer, 15321, 0.3, &targets).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Total_Reads\tConversion_Rate");
        assert_eq!(lines[1], "15321\t0.30");
        assert_eq!(lines[2], "Base\tNum_UnMethylated_(G->A)\tNum_Methylated_(G)");
        assert_eq!(lines[3], "1042\t3\t7");
        assert_eq!(lines[4], "2001\t10\t0");
    }

    #[test]
    fn report_with_no_targets_still_has_both_headers() {
        let mut buffer = Vec::new();
        write_counts_report(&mut buffer, 0, 0.0, &[]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn report_path_strips_vcf_gz() {
        assert_eq!(
            counts_report_path(Path::new("/data/s1.vcf.gz")),
            PathBuf::from("/data/s1.counts.tsv")
        );
        assert_eq!(
            counts_report_path(Path::new("plain.vcf")),
            PathBuf::from("plain.vcf.counts.tsv")
        );
    }
}
