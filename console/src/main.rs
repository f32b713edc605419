mod count;
mod stats;
mod utils;

use clap::{Parser, Subcommand};
use count::CountArgs;
use stats::StatsArgs;
use utils::UtilsArgs;

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    #[command(about = "Count methylated and unmethylated reads from a VCF file")]
    Count {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  CountArgs,
    },

    #[command(about = "Validate and summarize an aligned CpG matrix file")]
    Stats {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  StatsArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        MainMenu::Count { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
        MainMenu::Stats { utils, args } => {
            utils.setup()?;
            args.run(&utils)?;
        },
    }
    Ok(())
}
