// src/process/mod.rs

pub mod leaderboard;
pub mod referrals;
pub mod table;

pub use leaderboard::{build_leaderboard, LeaderboardEntry, POINTS_PER_CERTIFICATION};
pub use referrals::ReferralDirectory;
pub use table::{parse_markdown_table, Row, REFERRAL_CODE_HEADER};
