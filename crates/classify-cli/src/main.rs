//! Classify the openings of every game a player took part in.
//!
//! Usage:
//!   classify-openings [PGN_PATH] [PLAYER_NAME]
//!
//! Both can also come from the environment (or a `.env` file). The JSON
//! report goes to `OUTPUT_PATH`, or stdout when that is unset.

mod config;
mod error;

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;

use openings::{classify_games, ClassifiedGame};
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliError;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report can be piped from stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    let config = CliConfig::load()?;
    info!(
        pgn_path = %config.pgn_path.display(),
        player = %config.player_name,
        "Config loaded"
    );

    let text = fs::read_to_string(&config.pgn_path).map_err(CliError::from)?;
    let games = chess_core::pgn::parse_games(&text).map_err(CliError::from)?;
    info!(games = games.len(), "Parsed PGN");

    let classified = classify_games(&config.player_name, &games);
    log_summary(&classified);
    write_report(&config, &classified)?;

    Ok(())
}

fn log_summary(classified: &[ClassifiedGame]) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for game in classified {
        *counts.entry(game.label).or_insert(0) += 1;
    }
    for (label, count) in counts {
        info!(opening = label, count, "Opening count");
    }
}

fn write_report(config: &CliConfig, classified: &[ClassifiedGame]) -> Result<(), CliError> {
    let json = if config.pretty_json {
        serde_json::to_string_pretty(classified)?
    } else {
        serde_json::to_string(classified)?
    };

    match &config.output_path {
        Some(path) => {
            fs::write(path, json)?;
            info!(path = %path.display(), "Wrote report");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
