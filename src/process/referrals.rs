// src/process/referrals.rs

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Name → referral code directory, kept in declared order.
///
/// The source data does not guarantee code uniqueness. When two names share a
/// code, reverse lookup resolves to the first declared name.
#[derive(Debug, Clone, Default)]
pub struct ReferralDirectory {
    entries: Vec<(String, String)>,
}

impl ReferralDirectory {
    /// Parse the directory from a JSON object of `"name": "code"` pairs.
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(raw).context("referral directory is not valid JSON")?;
        let Value::Object(map) = value else {
            bail!("referral directory must be a JSON object");
        };

        let mut entries = Vec::with_capacity(map.len());
        for (name, code) in map {
            match code {
                Value::String(code) => entries.push((name, code)),
                other => bail!("referral code for {:?} is not a string: {}", name, other),
            }
        }
        Ok(Self { entries })
    }

    /// First declared name whose code matches, if any.
    pub fn owner_of(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, c)| c == code)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
