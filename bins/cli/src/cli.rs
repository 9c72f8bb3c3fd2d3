//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};

/// Montant - spell payment amounts in French words.
#[derive(Parser, Debug)]
#[command(name = "montant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Spell the amounts given as arguments
    Convert(ConvertArgs),

    /// Spell one amount per line read from stdin
    Stdin(OutputArgs),
}

/// Arguments for `montant convert`
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Amounts in dinars ("250.5", "250,500")
    #[arg(required = true, allow_negative_numbers = true)]
    pub amounts: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by all subcommands
#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Print one JSON object per amount
    #[arg(long)]
    pub json: bool,

    /// Exit with an error on the first amount that cannot be spelled
    #[arg(long)]
    pub strict: bool,
}
