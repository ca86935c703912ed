use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File to which errors are appended, in addition to stderr
    #[arg(long, global = true)]
    pub error_log: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetches a page and prints its visible text
    Extract(ExtractArgs),
}

#[derive(Args)]
pub struct ExtractArgs {
    /// URL of the HTML document
    pub url: String,
    /// Additional tag whose direct text is dropped (repeatable)
    #[arg(long = "exclude", value_name = "TAG")]
    pub exclude: Vec<String>,
    /// Parser backend: html, html-strict or fragment
    #[arg(long, default_value = text_raider::DEFAULT_BACKEND)]
    pub backend: String,
    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent with the request
    #[arg(long)]
    pub user_agent: Option<String>,
    /// Drop whitespace-only fragments instead of joining them as empty strings
    #[arg(long)]
    pub skip_blank: bool,
    /// Print a JSON report instead of plain text
    #[arg(long)]
    pub json: bool,
    /// Write the output to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,
}
