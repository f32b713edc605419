use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use amplimeth::external::{ReadCounter, SamtoolsReadCounter};
use amplimeth::extract::MethylationExtractor;
use amplimeth::io::report::{counts_report_path, write_counts_report};
use amplimeth::io::vcf::read_variant_lines;
use amplimeth::io::read_membership_set;
use clap::Args;
use console::style;

use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct CountArgs {
    #[arg(help = "The VCF file from which to count methylated and unmethylated reads.")]
    vcf_file: PathBuf,

    #[arg(help = "File with the target bases used to confirm bisulfite conversion.")]
    confirm_file: PathBuf,

    #[arg(help = "File with the target bases whose methylation status is checked.")]
    check_file: PathBuf,

    #[arg(help = "The BAM file from which the VCF was generated.")]
    bam_file: PathBuf,

    #[arg(
        short,
        long,
        help = "Path for the counts report. Defaults to the VCF path with a .counts.tsv suffix."
    )]
    output: Option<PathBuf>,
}

impl CountArgs {
    pub fn run(&self, _utils: &UtilsArgs) -> anyhow::Result<()> {
        let confirm = read_membership_set(&self.confirm_file)?;
        let check = read_membership_set(&self.check_file)?;

        let mut extractor = MethylationExtractor::new(confirm, check);
        for (line_no, line) in read_variant_lines(&self.vcf_file)? {
            extractor.process_line(line_no, &line)?;
        }
        let (conversion_rate, targets) = extractor.finish();

        let total_reads = SamtoolsReadCounter.count_reads(&self.bam_file)?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| counts_report_path(&self.vcf_file));
        let writer = BufWriter::new(File::create(&output)?);
        write_counts_report(writer, total_reads, conversion_rate, &targets)?;

        println!(
            "[{}] Counts report written to {}",
            style("V").green(),
            style(output.display()).green()
        );
        Ok(())
    }
}
