//! Nefnir command-line entry point

use clap::Parser;
use nefnir_cli::process::ProcessArgs;

fn main() {
    let args = ProcessArgs::parse();

    if let Err(e) = args.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
