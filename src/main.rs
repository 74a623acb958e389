use anyhow::Result;
use clap::Parser;

use highscore::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    cli::run(cli)
}
