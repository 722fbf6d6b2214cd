use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ici",
    version,
    about = "Circumstantial-evidence coherence audit for judicial decisions"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use this config file instead of the layered ici.toml lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a decision's reasoning against criteria C1-C12
    Evaluate(EvaluateCommand),
    /// Aggregate a precomputed criterion score map
    Aggregate(AggregateCommand),
    /// List criteria, bounds and effective weights
    Criteria,
}

#[derive(Args)]
pub struct EvaluateCommand {
    /// Document or directory of documents; `-` or omitted reads stdin
    #[arg(conflicts_with = "text")]
    pub path: Option<PathBuf>,
    /// Evaluate this text instead of reading a document
    #[arg(long)]
    pub text: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Exit with a blocking status when any adjusted index is below this value
    #[arg(long)]
    pub fail_under: Option<f64>,
}

#[derive(Args)]
pub struct AggregateCommand {
    /// JSON score map file, or `-` for stdin
    pub scores: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
