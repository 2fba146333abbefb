// src/process/table.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

/// Column header that attributes a submission row to an ambassador.
pub const REFERRAL_CODE_HEADER: &str = "Referral Code";

/// One data row, keyed by column header.
pub type Row = HashMap<String, String>;

/// Markdown separator shape: pipes, colons, whitespace, at least one dash.
static SEPARATOR_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|?[\s:|-]*-[\s:|-]*\|?$").expect("separator regex is valid"));

fn is_separator(line: &str) -> bool {
    SEPARATOR_LINE.is_match(line)
}

/// Split a table line into trimmed cells, dropping the empties produced by
/// leading and trailing pipes.
fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a pipe-delimited markdown table into rows keyed by header.
///
/// The first line is the header row. Blank lines and separator-shaped lines
/// are skipped wherever they appear, so a table with a missing separator does
/// not lose its first data row. Rows whose cell count differs from the
/// header's are dropped, as are rows with an empty "Referral Code" cell when
/// that column exists. None of these conditions is an error.
pub fn parse_markdown_table(text: &str) -> Vec<Row> {
    let mut lines = text.lines();
    let headers = match lines.next() {
        Some(line) => split_cells(line),
        None => return Vec::new(),
    };
    if headers.is_empty() {
        return Vec::new();
    }
    let has_referral_code = headers.iter().any(|h| h == REFERRAL_CODE_HEADER);

    let mut rows = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() || is_separator(line) {
            continue;
        }

        let cells = split_cells(line);
        if cells.len() != headers.len() {
            debug!(
                line = idx + 2,
                cells = cells.len(),
                expected = headers.len(),
                "dropping row with mismatched cell count"
            );
            continue;
        }

        let row: Row = headers.iter().cloned().zip(cells).collect();
        if has_referral_code
            && row
                .get(REFERRAL_CODE_HEADER)
                .map_or(true, |code| code.trim().is_empty())
        {
            debug!(line = idx + 2, "dropping row without a referral code");
            continue;
        }
        rows.push(row);
    }
    rows
}
