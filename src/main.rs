//! CLI entry point for the grid collage builder

use clap::Parser;
use gridstitch::io::cli::{Cli, CollageProcessor};

fn main() -> gridstitch::Result<()> {
    let cli = Cli::parse();
    let mut processor = CollageProcessor::new(cli);
    processor.process()
}
