// src/process/leaderboard.rs

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use super::referrals::ReferralDirectory;
use super::table::{Row, REFERRAL_CODE_HEADER};

/// Points awarded per completed certification.
pub const POINTS_PER_CERTIFICATION: u32 = 50;

/// Aggregated tally for one referral code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// Ambassador name, when the code resolves against the directory.
    pub name: Option<String>,
    pub referral_code: String,
    pub certifications: u32,
}

impl LeaderboardEntry {
    /// Display score: certifications × 50.
    pub fn score(&self) -> u32 {
        self.certifications * POINTS_PER_CERTIFICATION
    }
}

/// Tally certification rows per referral code and rank the result.
///
/// Codes accumulate in encounter order. The owning name is resolved once, when
/// a code is first seen, and never recomputed. The final sort is stable and
/// descending by certification count, so equal counts keep encounter order.
pub fn build_leaderboard(rows: &[Row], directory: &ReferralDirectory) -> Vec<LeaderboardEntry> {
    let mut by_code: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<LeaderboardEntry> = Vec::new();

    for row in rows {
        let Some(code) = row.get(REFERRAL_CODE_HEADER) else {
            debug!("row has no referral code column, skipping");
            continue;
        };
        let idx = *by_code.entry(code.clone()).or_insert_with(|| {
            entries.push(LeaderboardEntry {
                name: directory.owner_of(code).map(str::to_string),
                referral_code: code.clone(),
                certifications: 0,
            });
            entries.len() - 1
        });
        entries[idx].certifications += 1;
    }

    entries.sort_by(|a, b| b.certifications.cmp(&a.certifications));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn directory() -> ReferralDirectory {
        ReferralDirectory::from_json(r#"{"Alice":"ABC123","Bob":"XYZ999"}"#).unwrap()
    }

    #[test]
    fn tallies_and_ranks_by_count() {
        let rows = vec![
            row(&[("Name", "Alice"), (REFERRAL_CODE_HEADER, "ABC123")]),
            row(&[("Name", "Bob"), (REFERRAL_CODE_HEADER, "XYZ999")]),
            row(&[("Name", "Alice"), (REFERRAL_CODE_HEADER, "ABC123")]),
        ];
        let board = build_leaderboard(&rows, &directory());

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].name.as_deref(), Some("Alice"));
        assert_eq!(board[0].referral_code, "ABC123");
        assert_eq!(board[0].certifications, 2);
        assert_eq!(board[0].score(), 100);
        assert_eq!(board[1].name.as_deref(), Some("Bob"));
        assert_eq!(board[1].certifications, 1);
        assert_eq!(board[1].score(), 50);
    }

    #[test]
    fn one_entry_per_distinct_code() {
        let rows = vec![
            row(&[(REFERRAL_CODE_HEADER, "A")]),
            row(&[(REFERRAL_CODE_HEADER, "B")]),
            row(&[(REFERRAL_CODE_HEADER, "A")]),
            row(&[(REFERRAL_CODE_HEADER, "C")]),
        ];
        let board = build_leaderboard(&rows, &ReferralDirectory::default());
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn ties_keep_encounter_order() {
        let rows = vec![
            row(&[(REFERRAL_CODE_HEADER, "XYZ999")]),
            row(&[(REFERRAL_CODE_HEADER, "ABC123")]),
        ];
        let board = build_leaderboard(&rows, &directory());
        assert_eq!(board[0].referral_code, "XYZ999");
        assert_eq!(board[1].referral_code, "ABC123");
    }

    #[test]
    fn unknown_code_has_no_name() {
        let rows = vec![row(&[(REFERRAL_CODE_HEADER, "GHOST")])];
        let board = build_leaderboard(&rows, &directory());
        assert_eq!(board[0].name, None);
        assert_eq!(board[0].certifications, 1);
    }

    #[test]
    fn rows_without_referral_key_are_skipped() {
        let rows = vec![
            row(&[("Name", "Alice")]),
            row(&[(REFERRAL_CODE_HEADER, "ABC123")]),
        ];
        let board = build_leaderboard(&rows, &directory());
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].referral_code, "ABC123");
    }

    #[test]
    fn empty_input_yields_empty_leaderboard() {
        assert!(build_leaderboard(&[], &directory()).is_empty());
    }

    #[test]
    fn entries_serialize_for_export() {
        let json = serde_json::to_string(&entry_for("Alice", "ABC123", 2)).unwrap();
        assert!(json.contains(r#""name":"Alice""#));
        assert!(json.contains(r#""referral_code":"ABC123""#));
        assert!(json.contains(r#""certifications":2"#));
    }

    fn entry_for(name: &str, code: &str, certifications: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: Some(name.to_string()),
            referral_code: code.to_string(),
            certifications,
        }
    }
}
