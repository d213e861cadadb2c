use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "nutshell", about = "AI bullet-point summaries of YouTube videos", version)]
pub struct Cli {
    /// YouTube video URL or video ID
    pub url: String,

    /// LLM model for summarization (defaults from config, then claude-sonnet-4-6)
    #[arg(long)]
    pub model: Option<String>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show pipeline progress and metadata on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
