//! id128ctl (id128) - inspect, validate and write id128 files.
//!
//! Machine and boot ids are stored as a single id followed by a newline.
//! This tool reads and writes those files and checks candidate ids.

use anyhow::Result;
use clap::Parser;

mod commands;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
