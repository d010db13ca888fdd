//! Parsing of the answers typed at each prompt.
//!
//! All parsers are permissive: nothing is ever rejected, malformed pieces
//! are dropped instead.

/// Split a comma-separated directory list, trimming each entry.
///
/// Empty entries are kept: `""` yields one empty entry, which the scanner
/// then reports as unreadable.
#[must_use]
pub fn parse_directories(input: &str) -> Vec<String> {
    input.split(',').map(|dir| dir.trim().to_string()).collect()
}

/// Whether the answer enables deletion mode.
///
/// Only `yes` (any case, surrounding whitespace ignored) does.
#[must_use]
pub fn parse_deletion_answer(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}

/// Resolve a comma-separated list of 1-based numbers against a group of
/// `len` files.
///
/// Returns 0-based positions in the order typed. Each entry is read up to
/// its first non-digit, so `2abc` selects 2 and `1.5` selects 1. Entries
/// with no leading digits or outside `1..=len` are dropped, as are repeats
/// of a number already selected.
#[must_use]
pub fn parse_selection(input: &str, len: usize) -> Vec<usize> {
    let mut selected = Vec::new();

    for piece in input.split(',') {
        let Some(number) = leading_number(piece.trim()) else {
            continue;
        };
        if number == 0 || number > len {
            log::debug!("Ignoring out-of-range selection {} (1..={})", number, len);
            continue;
        }
        let position = number - 1;
        if !selected.contains(&position) {
            selected.push(position);
        }
    }

    selected
}

/// The unsigned integer that `piece` starts with, after an optional `+`.
///
/// Numbers too large for `usize` read as `usize::MAX`, which no group
/// reaches.
fn leading_number(piece: &str) -> Option<usize> {
    let unsigned = piece.strip_prefix('+').unwrap_or(piece);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(usize::MAX))
}
