// src/fetch/mod.rs

use anyhow::{Context, Result};
use futures::future;
use reqwest::Client;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::process::referrals::ReferralDirectory;

/// Remote markdown document listing one certification submission per table row.
pub static SUBMISSIONS_URL: &str =
    "https://raw.githubusercontent.com/GSSoC24/Postman-Challenge/main/add-your-certificate.md";

/// Static name → referral code directory shipped alongside the binary.
pub static REFERRAL_DATA_PATH: &str = "referral_data.json";

/// Fetch the submissions markdown from the fixed remote URL.
pub async fn fetch_submissions(client: &Client) -> Result<String> {
    debug!(url = SUBMISSIONS_URL, "fetching submissions table");
    let text = client
        .get(SUBMISSIONS_URL)
        .send()
        .await
        .with_context(|| format!("GET {} failed", SUBMISSIONS_URL))?
        .error_for_status()
        .with_context(|| format!("Non-success status from {}", SUBMISSIONS_URL))?
        .text()
        .await
        .with_context(|| format!("Reading text from {}", SUBMISSIONS_URL))?;
    debug!(bytes = text.len(), "submissions table fetched");
    Ok(text)
}

/// Load and parse the referral directory from a local static path.
pub async fn load_referral_directory(path: impl AsRef<Path>) -> Result<ReferralDirectory> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading referral directory {:?}", path))?;
    let directory = ReferralDirectory::from_json(&raw)
        .with_context(|| format!("parsing referral directory {:?}", path))?;
    debug!(entries = directory.len(), "referral directory loaded");
    Ok(directory)
}

/// Load both sources concurrently. The first failure wins and the other
/// side's result is discarded. One attempt per run, no retries.
pub async fn load_sources(client: &Client) -> Result<(String, ReferralDirectory)> {
    future::try_join(
        fetch_submissions(client),
        load_referral_directory(REFERRAL_DATA_PATH),
    )
    .await
}
