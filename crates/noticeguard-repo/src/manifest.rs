//! Reading requirement manifests and the license-scan report.

use camino::{Utf8Path, Utf8PathBuf};
use noticeguard_types::{ReconcileError, ScanReport};
use std::collections::BTreeMap;

/// Read the given manifests in order into a normalized-key → display-name
/// map. Every manifest must be readable; the first failure aborts.
pub fn read_requirement_manifests(
    paths: &[Utf8PathBuf],
) -> Result<BTreeMap<String, String>, ReconcileError> {
    let mut required = BTreeMap::new();
    for path in paths {
        let text =
            std::fs::read_to_string(path).map_err(|source| ReconcileError::ManifestMissing {
                path: path.clone(),
                source,
            })?;
        noticeguard_domain::collect_requirements(&text, &mut required);
    }
    Ok(required)
}

/// Read and parse the scan report. An empty file and malformed JSON are
/// distinct fatal conditions.
pub fn read_scan_report(path: &Utf8Path) -> Result<ScanReport, ReconcileError> {
    let text = std::fs::read_to_string(path).map_err(|source| ReconcileError::Io {
        path: path.to_owned(),
        source,
    })?;

    if text.is_empty() {
        return Err(ReconcileError::ScanReportEmpty {
            path: path.to_owned(),
        });
    }

    serde_json::from_str(&text).map_err(|source| ReconcileError::ScanReportInvalid {
        path: path.to_owned(),
        source,
    })
}
