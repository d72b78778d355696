//! CLI entry point for the image2logo generator

use clap::Parser;
use image2logo::io::cli::{Cli, run};
use image2logo::io::logging::init_logging;

fn main() -> image2logo::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;
    run(cli)
}
