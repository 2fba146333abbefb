// src/render/mod.rs

use crate::process::leaderboard::LeaderboardEntry;

pub static LOADING_MESSAGE: &str = "Loading leaderboard...";
pub static ERROR_MESSAGE: &str = "Failed to load leaderboard data";

/// Display columns, in order.
const COLUMNS: [&str; 5] = [
    "Rank",
    "Name",
    "Referral Code",
    "Number of Certifications",
    "Score",
];

/// The three mutually exclusive display states.
#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Error,
    Ready(Vec<LeaderboardEntry>),
}

impl ViewState {
    /// Plain-text rendering of the current state. Loading and error states
    /// are a single message; the ready state is the ranked table.
    pub fn render_text(&self) -> String {
        match self {
            ViewState::Loading => LOADING_MESSAGE.to_string(),
            ViewState::Error => ERROR_MESSAGE.to_string(),
            ViewState::Ready(entries) => render_text_table(entries),
        }
    }
}

/// One display row per entry: rank, name (blank when unresolved), code,
/// count, score.
fn display_rows(entries: &[LeaderboardEntry]) -> Vec<[String; 5]> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            [
                (idx + 1).to_string(),
                entry.name.clone().unwrap_or_default(),
                entry.referral_code.clone(),
                entry.certifications.to_string(),
                entry.score().to_string(),
            ]
        })
        .collect()
}

/// Aligned plain-text table of the ranked entries.
pub fn render_text_table(entries: &[LeaderboardEntry]) -> String {
    let rows = display_rows(entries);

    let mut widths: [usize; 5] = [0; 5];
    for (i, column) in COLUMNS.iter().enumerate() {
        widths[i] = column.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    push_text_row(&mut out, &COLUMNS.map(str::to_string), &widths);
    let rule: [String; 5] = widths.map(|w| "-".repeat(w));
    push_text_row(&mut out, &rule, &widths);
    for row in &rows {
        push_text_row(&mut out, row, &widths);
    }
    out
}

fn push_text_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        if i + 1 < cells.len() {
            for _ in cell.len()..widths[i] {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

/// HTML `<table>` of the ranked entries. Cell text is escaped.
pub fn render_html_table(entries: &[LeaderboardEntry]) -> String {
    let rows = display_rows(entries);

    let mut html = String::with_capacity(256 + rows.len() * 128);
    html.push_str("<table id=\"leaderboardTable\">\n  <thead>\n    <tr>");
    for column in COLUMNS {
        html.push_str("<th>");
        html.push_str(&escape_html(column));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");
    for row in &rows {
        html.push_str("    <tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("  </tbody>\n</table>\n");
    html
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
