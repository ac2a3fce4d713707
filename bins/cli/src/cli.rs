//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Preliminary credit-risk report for a receivable (duplicata escritural).
///
/// Computes financial ratios from the application, requests a narrative
/// assessment from a generative-language service and writes a Markdown report.
#[derive(Debug, Parser)]
#[command(name = "credrisk", version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON.
    #[arg(long, default_value = "data/sample_input.json")]
    pub input: PathBuf,

    /// Output directory (overrides `output.dir` from configuration).
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Extra configuration file layered over `config/`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not call the narrative service; insert a placeholder instead.
    #[arg(long)]
    pub skip_narrative: bool,
}
