use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "infusiondx", version, about = "Infusion program diagnostic CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
    Benchmarks(BenchmarksArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Form inputs JSON file")]
    pub inputs: PathBuf,

    #[arg(long, help = "Lead contact JSON file")]
    pub lead: Option<PathBuf>,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = false, help = "Write diagnostic.json")]
    pub json: bool,

    #[arg(long, default_value_t = false, help = "Write executive_brief.html")]
    pub html: bool,

    #[arg(long, help = "Append the submission to a JSON store file")]
    pub store: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Form inputs JSON file")]
    pub inputs: PathBuf,
}

#[derive(Debug, Args)]
pub struct BenchmarksArgs {
    #[command(subcommand)]
    pub command: BenchmarksCommand,
}

#[derive(Debug, Subcommand)]
pub enum BenchmarksCommand {
    Show,
}
