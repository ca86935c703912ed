mod cli;
mod serialization;

use std::fs::OpenOptions;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ExtractArgs};
use serialization::{save_to_file, serialize_to_json};
use text_raider::{FetchConfig, HttpFetcher, TextExtractor};
use tokio::io::AsyncWriteExt;
use tokio::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.error_log.as_deref()) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    let result = match &cli.command {
        Commands::Extract(args) => extract_and_print(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(error_log: Option<&str>) -> Result<()> {
    let error_layer = match error_log {
        Some(path) => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open error log {}", path))?;

            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(log_file.with_min_level(Level::ERROR))
                    .with_filter(EnvFilter::new("error")),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(error_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    Ok(())
}

async fn extract_and_print(args: &ExtractArgs) -> Result<()> {
    let config = FetchConfig {
        timeout: args.timeout_secs.map(Duration::from_secs),
        user_agent: args.user_agent.clone(),
    };
    let fetcher =
        HttpFetcher::try_with_config(&config).context("Failed to build the HTTP client")?;
    let mut extractor = TextExtractor::new(&args.url, &args.exclude);
    if args.skip_blank {
        extractor = extractor.skipping_blank_fragments();
    }
    let extractor = extractor.with_fetcher(fetcher);

    let start = Instant::now();
    let page = extractor.extract_page(None, Some(&args.backend)).await?;
    info!(
        "Extracted {} fragments from {} in {:?}",
        page.fragments,
        page.url,
        start.elapsed()
    );

    let output = if args.json {
        serialize_to_json(&page)?
    } else {
        let mut text = page.text.into_bytes();
        text.push(b'\n');
        text
    };

    match &args.output {
        Some(path) => save_to_file(path, &output)
            .await
            .with_context(|| format!("Failed to write output to {}", path))?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&output).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}
