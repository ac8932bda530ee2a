//! CLI entry point for the fingerprint sheet generator

use clap::Parser;
use fingerprints::io::cli::{Cli, CommandProcessor};
use fingerprints::io::logging::init_logging;

fn main() -> fingerprints::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // Usage and help are shown without failing the process
            error.print()?;
            return Ok(());
        }
    };

    init_logging(cli.log_level());
    let processor = CommandProcessor::new(cli);
    processor.process()
}
