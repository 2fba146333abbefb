use anyhow::{Context, Result};
use certboard::{
    fetch,
    process::{build_leaderboard, parse_markdown_table, LeaderboardEntry},
    render::{self, ViewState},
};
use reqwest::Client;
use std::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Where the rendered HTML table lands, next to the binary's working dir.
const HTML_OUT: &str = "leaderboard.html";

#[tokio::main]
async fn main() {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    println!("{}", ViewState::Loading.render_text());

    let state = match run().await {
        Ok(entries) => ViewState::Ready(entries),
        Err(err) => {
            error!("leaderboard load failed: {:#}", err);
            ViewState::Error
        }
    };

    println!("{}", state.render_text());
    if matches!(state, ViewState::Error) {
        std::process::exit(1);
    }
}

async fn run() -> Result<Vec<LeaderboardEntry>> {
    // ─── 2) load both sources concurrently ───────────────────────────
    let client = Client::new();
    let (markdown, directory) = fetch::load_sources(&client).await?;

    // ─── 3) parse + aggregate ────────────────────────────────────────
    let rows = parse_markdown_table(&markdown);
    info!(rows = rows.len(), "parsed submission rows");
    let leaderboard = build_leaderboard(&rows, &directory);
    info!(entries = leaderboard.len(), "leaderboard built");

    // ─── 4) write the html table ─────────────────────────────────────
    fs::write(HTML_OUT, render::render_html_table(&leaderboard))
        .with_context(|| format!("writing {}", HTML_OUT))?;
    info!(path = HTML_OUT, "html table written");

    Ok(leaderboard)
}
