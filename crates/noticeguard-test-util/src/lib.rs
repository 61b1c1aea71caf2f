//! Shared test utilities for the noticeguard workspace.
//!
//! Builders for scan-report JSON fixtures, used by domain unit tests and
//! the CLI integration tests. Kept as a crate (not `#[cfg(test)]` modules)
//! so every member can reuse the same fixture shapes.

use serde_json::{json, Value};

/// A scan record for a license or metadata file with no package descriptor.
pub fn scan_file(path: &str, license_keys: &[&str]) -> Value {
    json!({
        "path": path,
        "licenses": license_keys.iter().map(|k| json!({"key": k})).collect::<Vec<_>>(),
        "packages": [],
    })
}

/// A scan record carrying a package descriptor, as scanners emit for
/// METADATA files.
pub fn scan_file_with_package(
    path: &str,
    license_keys: &[&str],
    homepage_url: Option<&str>,
    vcs_url: Option<&str>,
) -> Value {
    json!({
        "path": path,
        "licenses": license_keys.iter().map(|k| json!({"key": k})).collect::<Vec<_>>(),
        "packages": [{"homepage_url": homepage_url, "vcs_url": vcs_url}],
    })
}

/// Assemble scan records into report JSON text.
pub fn scan_report_json(files: &[Value]) -> String {
    json!({ "files": files }).to_string()
}
