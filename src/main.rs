//! CLI entry point for the motif map layout tool

use clap::Parser;
use motifmap::io::cli::{Cli, FileProcessor};
use motifmap::io::logging;

fn main() -> motifmap::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
