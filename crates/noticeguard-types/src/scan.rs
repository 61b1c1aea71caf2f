//! DTOs for the license-scan report consumed by the matcher.
//!
//! The report is the JSON emitted by a scancode-style license scanner:
//! one entry per file found under the scanned dependency tree, with the
//! detected license tags and (for metadata files) package descriptors.

use serde::Deserialize;

/// Top-level scan report. The `files` array is required; a report without
/// it is rejected at parse time.
#[derive(Clone, Debug, Deserialize)]
pub struct ScanReport {
    pub files: Vec<ScanFile>,
}

/// One scanned file record.
#[derive(Clone, Debug, Deserialize)]
pub struct ScanFile {
    /// Slash-separated path, relative to the scan root.
    pub path: String,
    /// Detected license tags, in scanner order.
    #[serde(default)]
    pub licenses: Vec<LicenseTag>,
    /// Package descriptors attached to metadata files.
    #[serde(default)]
    pub packages: Vec<PackageDescriptor>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LicenseTag {
    pub key: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default)]
    pub homepage_url: Option<String>,
    #[serde(default)]
    pub vcs_url: Option<String>,
}
