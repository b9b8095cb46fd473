//! Plain-text table rendering for stored passwords.
//!
//! ```text
//! +------------+---------+--------+------------------------------+
//! | Serial No. | Keyword | Secret | Last Updated                 |
//! +------------+---------+--------+------------------------------+
//! |         1. | github  | p4ss   | on 1 Jan 2025 at 10:00:00 AM |
//! +------------+---------+--------+------------------------------+
//! ```
//!
//! Columns grow to fit the longest value; nothing is truncated.

use crate::store::SecretEntry;

/// Column titles, serial number first.
pub const HEADERS: [&str; 4] = ["Serial No.", "Keyword", "Secret", "Last Updated"];

/// Render entries as a bordered table, one line per row.
pub fn render_entries(entries: &[SecretEntry]) -> String {
    let rows: Vec<[&str; 3]> = entries
        .iter()
        .map(|e| [e.key.as_str(), e.secret.as_str(), e.last_modified.as_str()])
        .collect();
    render(&rows)
}

/// Render rows of `[keyword, secret, last updated]` cells.
///
/// The serial column is generated: row `N` shows `N.` right-aligned.
pub fn render(rows: &[[&str; 3]]) -> String {
    let mut widths: [usize; 4] = HEADERS.map(char_len);

    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column + 1] = widths[column + 1].max(char_len(cell));
        }
    }
    // One extra for the period after the number.
    widths[0] = widths[0].max(digit_count(rows.len()) + 1);

    let border = border_line(&widths);
    let mut out = String::new();

    out.push_str(&border);
    out.push_str(&row_line(&HEADERS, &widths));
    out.push_str(&border);

    for (i, row) in rows.iter().enumerate() {
        let serial = format!("{:>width$}", format!("{}.", i + 1), width = widths[0]);
        let cells = [serial.as_str(), row[0], row[1], row[2]];
        out.push_str(&row_line(&cells, &widths));
    }
    out.push_str(&border);

    out
}

/// `+` then `width + 2` dashes for every column, closed with `+`.
fn border_line(widths: &[usize]) -> String {
    let mut line = String::new();
    for width in widths {
        line.push('+');
        line.push_str(&"-".repeat(width + 2));
    }
    line.push_str("+\n");
    line
}

/// `| cell<pad> ` for every column, closed with `|`.
fn row_line(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str("| ");
        line.push_str(cell);
        line.push_str(&" ".repeat(width - char_len(cell)));
        line.push(' ');
    }
    line.push_str("|\n");
    line
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn digit_count(n: usize) -> usize {
    n.to_string().len()
}
