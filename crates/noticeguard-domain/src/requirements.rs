//! Requirement manifest parsing and name normalization.
//!
//! A manifest lists one dependency specifier per line, e.g.
//! `elastic-apm==6.7.2` or `requests[security]>=2.0`. Installed
//! dependency folders use underscores where the specifier uses hyphens
//! (`venv/.../elastic_apm-6.7.2.dist-info/...`), so each specifier yields
//! two names: the normalized lookup key and the display name written to
//! the NOTICE file.

use std::collections::BTreeMap;

/// Parse one manifest's text into `required`, keyed by normalized name with
/// the cleaned display name as value. First occurrence of a key wins across
/// all manifests. Blank lines and `#` comments are skipped.
pub fn collect_requirements(text: &str, required: &mut BTreeMap<String, String>) {
    for line in text.lines() {
        let Some((key, display)) = parse_requirement_line(line) else {
            continue;
        };
        required.entry(key).or_insert(display);
    }
}

/// Split a specifier line into `(normalized_key, display_name)`.
///
/// Cleaning drops the version pin (everything from the first `=`) and any
/// `>`/`<` comparator remnants. The display name is the cleaned specifier
/// as written (extras group retained); the key replaces hyphens with
/// underscores and drops a trailing `[extras]` group.
pub fn parse_requirement_line(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let display = trimmed
        .split('=')
        .next()
        .unwrap_or(trimmed)
        .trim_end_matches(['>', '<'])
        .trim();
    if display.is_empty() {
        return None;
    }

    let mut key = display.replace('-', "_");
    if let Some((bare, _extras)) = key.split_once('[') {
        key = bare.to_string();
    }

    Some((key, display.to_string()))
}
