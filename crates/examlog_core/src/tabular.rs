//! Delimited-text encoding and decoding for row data.
//!
//! # Responsibility
//! - Encode rows of string fields as comma-separated text.
//! - Decode that text back into rows, honoring quoted fields.
//!
//! # Invariants
//! - `parse_rows(&encode_rows(rows))` preserves field content exactly.
//! - Output is UTF-8 with `\n` line terminators and no BOM.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TabularResult<T> = Result<T, TabularError>;

/// Decode failure for delimited text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabularError {
    /// A quoted field was still open at end of input.
    UnclosedQuote { line: usize },
}

impl TabularError {
    /// 1-based line where the failure was detected.
    pub fn line(&self) -> usize {
        match self {
            Self::UnclosedQuote { line } => *line,
        }
    }
}

impl Display for TabularError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnclosedQuote { line } => {
                write!(f, "unclosed quoted field starting on line {line}")
            }
        }
    }
}

impl Error for TabularError {}

/// Encodes one field, quoting when it contains a delimiter, quote, or
/// line break.
pub fn encode_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Encodes rows as comma-separated lines with a trailing newline.
pub fn encode_rows(rows: &[Vec<String>]) -> String {
    let mut text = String::new();
    for row in rows {
        for (index, field) in row.iter().enumerate() {
            if index > 0 {
                text.push(',');
            }
            text.push_str(&encode_field(field));
        }
        text.push('\n');
    }
    text
}

/// Decodes comma-separated text into rows of fields.
///
/// Handles `"`-quoted fields with doubled-quote escapes and both `\n` and
/// `\r\n` line terminators. A trailing newline does not produce an empty
/// final row.
pub fn parse_rows(text: &str) -> TabularResult<Vec<Vec<String>>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quote_start_line = 0;
    let mut line = 1;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                other => field.push(other),
            }
            continue;
        }

        match ch {
            '"' => {
                in_quotes = true;
                quote_start_line = line;
            }
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                line += 1;
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            other => field.push(other),
        }
    }

    if in_quotes {
        return Err(TabularError::UnclosedQuote {
            line: quote_start_line,
        });
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}
