use clap::Parser;
use colored::Colorize;
use serpcluster_core::cli::{run, Cli};
use std::process;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}
