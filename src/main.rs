use clap::Parser;
use miette::Result;
use redline::cli::{Cli, Commands};
use redline::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Normalize(args) => redline::cli::normalize::run(args, &printer)?,
        Commands::Color(args) => redline::cli::color::run(args)?,
        Commands::Init(args) => redline::cli::init::run(args, &printer)?,
    }

    Ok(())
}
