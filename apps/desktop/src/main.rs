use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{messages, ClientConfig, EstimationSession, HttpBackend};
use shared::domain::ComparisonChoice;
use tokio::io::{stdin, AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing_subscriber::EnvFilter;

mod menu;
mod render;

use menu::{parse_menu_command, MenuCommand};
use render::{choice_menu, render_view};

#[derive(Parser, Debug)]
#[command(about = "Estimate how difficult an experience was and refine it by comparison")]
struct Args {
    /// TOML file with `base_url` / `request_timeout_secs`.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured backend base URL.
    #[arg(long)]
    base_url: Option<String>,
    /// Submit this comparison right after the estimate instead of prompting.
    #[arg(long)]
    choice: Option<ComparisonChoice>,
    /// The experience to estimate; read from stdin when omitted.
    text: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut config = ClientConfig::load(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url)?;
    }
    tracing::info!(base_url = %config.base_url, "using estimator backend");

    let backend = HttpBackend::new(&config)?;
    let mut session = EstimationSession::new(Arc::new(backend));

    let mut input = BufReader::new(stdin());
    let text_from_stdin = args.text.is_none();
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut text = String::new();
            input
                .read_to_string(&mut text)
                .await
                .context("failed to read experience from stdin")?;
            text.trim_end().to_string()
        }
    };

    let estimate = session.submit_estimate(&text).await;
    print!("{}", render_view(&session.view()));
    estimate?;

    if let Some(choice) = args.choice {
        let comparison = session.submit_comparison(choice).await;
        print!("{}", render_view(&session.view()));
        comparison?;
        return Ok(());
    }

    // stdin was consumed by the experience text; nothing left to prompt with.
    if text_from_stdin {
        return Ok(());
    }

    let mut lines = input.lines();
    loop {
        println!("\n{}", choice_menu());
        let Some(line) = lines.next_line().await.context("failed to read choice")? else {
            break;
        };
        match parse_menu_command(&line) {
            Ok(MenuCommand::Quit) => break,
            Ok(MenuCommand::Compare(choice)) => {
                if let Err(err) = session.submit_comparison(choice).await {
                    tracing::debug!(choice = choice.as_str(), "comparison not applied: {err}");
                }
            }
            Ok(MenuCommand::StartOver) => {
                session.reset()?;
                println!("{}", messages::NEW_EXPERIENCE_PROMPT);
                let Some(text) = lines.next_line().await.context("failed to read experience")?
                else {
                    break;
                };
                if let Err(err) = session.submit_estimate(text.trim_end()).await {
                    tracing::debug!("estimate not applied: {err}");
                }
            }
            Err(err) => {
                println!("{err}");
                continue;
            }
        }
        print!("{}", render_view(&session.view()));
    }

    Ok(())
}
