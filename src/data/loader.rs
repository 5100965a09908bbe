use std::path::Path;

use anyhow::{Context, Result};

use super::model::{DataError, NumericTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a whitespace-delimited numeric table from a file.
///
/// Format:
/// * one observation per line, fields separated by spaces or tabs
/// * `#` starts a comment that runs to the end of the line
/// * blank lines are skipped
/// * every data line must have the same number of fields
pub fn load_file(path: &Path) -> Result<NumericTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let table = parse_table(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(table)
}

// ---------------------------------------------------------------------------
// Text parser
// ---------------------------------------------------------------------------

/// Parse the text of a numeric table. Line and column numbers in errors
/// are 1-based.
pub fn parse_table(text: &str) -> Result<NumericTable, DataError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut expected: Option<usize> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let content = strip_comment(raw);
        if content.trim().is_empty() {
            continue;
        }

        let row = parse_row(content, line_no)?;

        match expected {
            None => expected = Some(row.len()),
            Some(n) if n != row.len() => {
                return Err(DataError::RaggedRow {
                    line: line_no,
                    expected: n,
                    found: row.len(),
                });
            }
            Some(_) => {}
        }
        rows.push(row);
    }

    Ok(NumericTable::from_rows(rows))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_row(content: &str, line: usize) -> Result<Vec<f64>, DataError> {
    content
        .split_whitespace()
        .enumerate()
        .map(|(j, tok)| {
            tok.parse::<f64>().map_err(|_| DataError::InvalidNumber {
                line,
                column: j + 1,
                token: tok.to_string(),
            })
        })
        .collect()
}
