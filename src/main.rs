use clap::Parser;
use std::process;

use pdfedit::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = pdfedit::run(&cli) {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}
