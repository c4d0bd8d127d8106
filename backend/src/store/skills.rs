//! Parser for the skills/jobs statistics table.
//!
//! The table is a plain comma-separated file with a header line and eight
//! positional columns:
//!
//! ```text
//! district_name,mandal_name,it_jobs,non_it_jobs,test_results,completed,in_progress,pending
//! ```
//!
//! Cells are not quoted. Job and test figures that do not start with an
//! integer become `None`; skill-development counts fall back to 0.

use csv::{ReaderBuilder, StringRecord};

use crate::models::{SkillDevelopment, StatRecord};

/// Parse the whole table. The first line is always treated as the header;
/// rows are matched by position, not by header name.
pub fn parse_skills_table(text: &str) -> Result<Vec<StatRecord>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        records.push(parse_row(&row));
    }
    Ok(records)
}

/// Parse a single data row. Missing trailing columns read as empty cells.
pub fn parse_row(row: &StringRecord) -> StatRecord {
    let cell = |i: usize| row.get(i).unwrap_or("");

    StatRecord {
        district_name: cell(0).to_string(),
        mandal_name: cell(1).to_string(),
        it_jobs: parse_leading_int(cell(2)),
        non_it_jobs: parse_leading_int(cell(3)),
        test_results: parse_leading_int(cell(4)),
        skill_development: SkillDevelopment {
            completed: parse_leading_int(cell(5)).unwrap_or(0),
            in_progress: parse_leading_int(cell(6)).unwrap_or(0),
            pending: parse_leading_int(cell(7)).unwrap_or(0),
        },
    }
}

/// Leading-integer parse: skip whitespace, accept one sign, read digits up to
/// the first non-digit. `None` when no digit is found or the value overflows.
pub fn parse_leading_int(cell: &str) -> Option<i64> {
    let s = cell.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
