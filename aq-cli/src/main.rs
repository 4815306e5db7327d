//! AQ CLI - Command line tool for the air quality dashboard data.

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "aq-cli",
    version,
    about = "Synthetic daily air quality data for the Fairhope dashboard"
)]
struct Cli {
    #[command(flatten)]
    generator: aq_cmd::GeneratorArgs,

    #[command(subcommand)]
    command: aq_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("{:?}", cli.command);
    aq_cmd::run(cli.command, &cli.generator)
}
