//! Training table parsing.
//!
//! This module reads the labeled corpus a model is trained from. The
//! format is a tab-separated table: one row per line, each row holding
//! exactly two columns, `label<TAB>text`.
//!
//! ## The Input Contract
//!
//! - Rows are split on `\n`; a trailing `\r` is tolerated (CRLF input)
//! - Every row must contain exactly one tab; a blank line is a row with
//!   zero columns and rejected like any other malformed row
//! - The zero-length tail after a final `\n` is the end of the table,
//!   not a row
//! - Labels and texts are taken verbatim, including empty ones
//!
//! Parsing is strict: the first malformed row aborts with the 1-based
//! line number and the column count actually found. Rows are emitted via
//! callback as zero-copy slices of the input, so callers that need
//! all-or-nothing behavior should validate before accumulating.

use core::str;
use memchr::memchr_iter;

use triglot_types::TrainError;

/// One parsed training row: a language label and a text sample.
///
/// Both fields borrow from the table the row was parsed out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow<'a> {
    /// Language label, e.g. `"French"`.
    pub label: &'a str,
    /// Text sample attributed to that language. May be empty.
    pub text: &'a str,
}

/// Decodes raw table bytes as UTF-8.
///
/// # Errors
/// Returns `TrainError::InvalidEncoding` with the number of leading
/// bytes that decoded cleanly.
pub fn decode(bytes: &[u8]) -> Result<&str, TrainError> {
    str::from_utf8(bytes).map_err(|e| TrainError::InvalidEncoding {
        valid_up_to: e.valid_up_to(),
    })
}

/// Parses a training table, emitting each row through a callback.
///
/// Rows are emitted in table order as slices of `table`, with no
/// intermediate collection. Stops at the first malformed row.
///
/// # Example
///
/// ```
/// use triglot_core::corpus::parse_rows;
///
/// let mut labels = Vec::new();
/// parse_rows("English\thello\nFrench\tbonjour\n", |row| {
///     labels.push(row.label);
/// })
/// .unwrap();
///
/// assert_eq!(labels, ["English", "French"]);
/// ```
///
/// # Errors
/// Returns `TrainError::MalformedRow` for any line that does not split
/// into exactly two columns; a blank line counts as zero columns. Only
/// the zero-length tail after a final newline is not a line.
pub fn parse_rows<'a, F>(table: &'a str, mut emit: F) -> Result<(), TrainError>
where
    F: FnMut(TableRow<'a>),
{
    let bytes = table.as_bytes();
    let mut start = 0usize;
    let mut line_no = 0usize;

    for nl in memchr_iter(b'\n', bytes) {
        line_no += 1;
        emit(split_row(&bytes[start..nl], line_no)?);
        start = nl + 1;
    }

    // Last line without a trailing newline. An empty tail here is the
    // end of the table, not a blank row.
    if start < bytes.len() {
        line_no += 1;
        emit(split_row(&bytes[start..], line_no)?);
    }

    Ok(())
}

/// Splits one line into its two columns.
///
/// A line that is empty after CRLF stripping holds zero columns.
fn split_row(line: &[u8], line_no: usize) -> Result<TableRow<'_>, TrainError> {
    // Tolerate CRLF line endings
    let line = match line.last() {
        Some(b'\r') => &line[..line.len() - 1],
        _ => line,
    };

    if line.is_empty() {
        return Err(TrainError::MalformedRow {
            line: line_no,
            columns: 0,
        });
    }

    let mut tabs = memchr_iter(b'\t', line);
    let split = match tabs.next() {
        Some(i) => i,
        None => {
            return Err(TrainError::MalformedRow {
                line: line_no,
                columns: 1,
            })
        }
    };

    if tabs.next().is_some() {
        // Two tabs seen so far plus whatever is left
        return Err(TrainError::MalformedRow {
            line: line_no,
            columns: 3 + tabs.count(),
        });
    }

    // SAFETY: `line` is a subslice of valid UTF-8 cut only at ASCII newline
    // bytes, and `split` is the position of an ASCII tab (0x09). Neither is
    // ever a continuation byte, so both halves are valid UTF-8 subslices.
    let label = unsafe { str::from_utf8_unchecked(&line[..split]) };
    let text = unsafe { str::from_utf8_unchecked(&line[split + 1..]) };

    Ok(TableRow { label, text })
}
