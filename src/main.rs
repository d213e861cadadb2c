use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use log::{error, info};

mod cli;

use cli::{Cli, OutputFormat};

use nutshell::config::{self, Config};
use nutshell::summarize::Summarizer;
use nutshell::{output, pipeline};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("nutshell.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nutshell")
        .join("logs")
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_default();

    // CLI flag takes priority over config file over built-in default
    let model = cli
        .model
        .clone()
        .or(config.default_model)
        .unwrap_or_else(|| config::DEFAULT_MODEL.to_string());

    // Credential is read from the environment once, here, and handed to
    // the summarizer at construction
    let api_key = config::resolve_api_key(&model)?;

    let client = reqwest::Client::new();
    let summarizer = Summarizer::new(client.clone(), &model, api_key);

    if cli.verbose {
        eprintln!("Model: {}", summarizer.model());
    }

    match pipeline::run(&client, &summarizer, &cli.url).await {
        Ok(report) => {
            if cli.verbose {
                eprintln!(
                    "Video: {} ({})\nLanguage: {}\nTranscript: {} chars",
                    report.title,
                    report.video_id,
                    report.language,
                    report.transcript.len(),
                );
            }

            let rendered = match cli.format {
                OutputFormat::Text => output::render_text(&report),
                OutputFormat::Json => output::render_json(&report)?,
            };

            if let Some(ref path) = cli.output {
                std::fs::write(path, &rendered)?;
                if cli.verbose {
                    eprintln!("Output written to: {}", path.display());
                }
            } else {
                println!("{rendered}");
            }

            Ok(())
        }
        Err(e) => {
            error!("Pipeline failed while {}: {e}", e.stage());
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
