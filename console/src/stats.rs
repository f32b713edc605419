use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::exit;

use amplimeth::data_structs::amplicon::AmpliconSchema;
use amplimeth::io::aligned::read_aligned_matrix;
use amplimeth::io::report::write_matrix_stats;
use amplimeth::plots::{HeatmapRenderer, SvgHeatmap};
use clap::Args;
use console::style;

use crate::utils::UtilsArgs;

#[derive(Args, Debug, Clone)]
pub(crate) struct StatsArgs {
    #[arg(help = "Aligned CpG file to be processed.")]
    aligned_file: PathBuf,

    #[arg(
        short = 'n',
        long,
        default_value_t = 300,
        help = "Number of rows kept for the presentation set."
    )]
    selection_count: usize,

    #[arg(short, long, help = "Directory for the stats and figure outputs.")]
    output_path: PathBuf,

    #[arg(short, long, help = "Amplicon being processed (1..=5).")]
    amplicon: u8,
}

impl StatsArgs {
    pub fn run(&self, _utils: &UtilsArgs) -> anyhow::Result<()> {
        let schema = AmpliconSchema::from_id(self.amplicon)?;

        let mut matrix = match read_aligned_matrix(&self.aligned_file, schema) {
            Ok(matrix) => matrix,
            Err(e) => {
                eprintln!("{}", style("FAILED").red());
                eprintln!("{}", style(&e).red());
                exit(1);
            },
        };

        matrix.sort_by_row_sum();
        matrix.truncate(self.selection_count);

        let figure_path = self
            .output_path
            .join(format!("figure{}.svg", self.amplicon));
        SvgHeatmap::default().render(&matrix.to_array(), &figure_path)?;

        let stats = matrix.stats();
        let stats_path = self
            .output_path
            .join(format!("stats{}.json", self.amplicon));
        let writer = BufWriter::new(File::create(&stats_path)?);
        write_matrix_stats(writer, &stats)?;

        println!(
            "[{}] Amplicon {}: {:.2}% methylation over {} rows",
            style("V").green(),
            self.amplicon,
            stats.percent_methylation,
            matrix.n_rows()
        );
        println!(
            "    figure: {}\n    stats:  {}",
            figure_path.display(),
            stats_path.display()
        );
        Ok(())
    }
}
