//! NOTICE ledger inspection: recover recorded package names and diff them
//! against the required set.

use std::collections::BTreeMap;

/// Extract the display names already recorded in the NOTICE text, sorted.
/// A record is any line beginning `Package: `.
pub fn recorded_packages(notice_text: &str) -> Vec<String> {
    let mut names: Vec<String> = notice_text
        .lines()
        .filter_map(|line| line.strip_prefix("Package: "))
        .map(str::to_string)
        .collect();
    names.sort();
    names
}

/// Required entries (key → display) whose display name is not yet recorded,
/// in sorted key order.
pub fn diff_new_packages<'a>(
    required: &'a BTreeMap<String, String>,
    recorded: &[String],
) -> Vec<(&'a str, &'a str)> {
    required
        .iter()
        .filter(|(_, display)| !recorded.iter().any(|name| name == *display))
        .map(|(key, display)| (key.as_str(), display.as_str()))
        .collect()
}

/// First recorded name that no requirement declares, if any. Such a name
/// means the ledger no longer matches the manifests and must abort the run.
pub fn find_unrequired_package<'a>(
    required: &BTreeMap<String, String>,
    recorded: &'a [String],
) -> Option<&'a str> {
    recorded
        .iter()
        .find(|name| !required.values().any(|display| display == *name))
        .map(String::as_str)
}
