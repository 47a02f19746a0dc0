pub mod color;
pub mod init;
pub mod normalize;

use clap::{Parser, Subcommand};

/// redline - design spec normalizer
#[derive(Parser, Debug)]
#[command(name = "redline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize a raw design dump into a spec document
    Normalize(normalize::NormalizeArgs),

    /// Show every representation of one or more hex colors
    Color(color::ColorArgs),

    /// Initialize a redline project (generates redline.yaml)
    Init(init::InitArgs),
}
