// src/core/sanitize.rs
use crate::config::consts::UNSPECIFIED;

/// Trim surrounding whitespace; the sheet's "Unspecified" placeholder becomes "".
/// Nothing else in the cell is touched.
pub fn normalize_cell(raw: &str) -> String {
    let t = raw.trim();
    if t == UNSPECIFIED { String::new() } else { t.to_string() }
}

/// True for a missing or whitespace-only cell.
pub fn is_blank(cell: Option<&str>) -> bool {
    cell.is_none_or(|c| c.trim().is_empty())
}
