// src/bin/render_file.rs
//
// Offline harness: build the leaderboard from a local markdown table and
// referral directory, no network.
//
//   cargo run --bin render_file -- [--json] table.md referral_data.json

use anyhow::{Context, Result};
use certboard::{
    fetch,
    process::{build_leaderboard, parse_markdown_table},
    render,
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let mut args = std::env::args().skip(1).peekable();
    let usage = "usage: render_file [--json] <table.md> <referrals.json>";
    let as_json = args.peek().map(String::as_str) == Some("--json");
    if as_json {
        args.next();
    }
    let table_path = args.next().context(usage)?;
    let referrals_path = args.next().context(usage)?;

    let markdown = tokio::fs::read_to_string(&table_path)
        .await
        .with_context(|| format!("reading {}", table_path))?;
    let directory = fetch::load_referral_directory(&referrals_path).await?;

    let rows = parse_markdown_table(&markdown);
    let leaderboard = build_leaderboard(&rows, &directory);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&leaderboard)?);
    } else {
        println!("{}", render::render_text_table(&leaderboard));
    }
    Ok(())
}
