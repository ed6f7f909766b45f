//! Header and cell normalization.

/// Trims whitespace and a stray UTF-8 BOM, and collapses inner runs of
/// whitespace to a single space.
pub fn normalize_header(raw: &str) -> String {
    strip(raw).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trims whitespace and a stray UTF-8 BOM from a data cell.
pub fn normalize_cell(raw: &str) -> String {
    strip(raw).to_string()
}

fn strip(raw: &str) -> &str {
    raw.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
}
