//! Scan-report matching: associate a required package with its license and
//! metadata evidence.
//!
//! Scanned archives nest the dependency's `<name>-<version>.dist-info`
//! directory at varying depths depending on how deeply the scanned project
//! itself sits under the scan root. Rather than requiring a single layout,
//! the matcher recognizes three nesting profiles and derives the package
//! segment index from the total path depth.

use noticeguard_types::{PackageDescriptor, ScanReport};

/// License file names recognized by the matcher: the plain spellings plus
/// the `<spdx>.LICENSE` variants scanners rename detected files to.
pub const LICENSE_FILE_NAMES: &[&str] = &[
    "LICENSE",
    "LICENSE.txt",
    "LICENSE.rst",
    "apache-1.0.LICENSE",
    "apache-1.0.LICENSE.txt",
    "apache-1.1.LICENSE",
    "apache-1.1.LICENSE.txt",
    "apache-2.0.LICENSE",
    "apache-2.0.LICENSE.txt",
    "apple-attribution.LICENSE",
    "apple-attribution.LICENSE.txt",
    "bsd-zero.LICENSE",
    "bsd-zero.LICENSE.txt",
    "bsd-2-clause-freebsd.LICENSE",
    "bsd-2-clause-freebsd.LICENSE.txt",
    "bsd-2-clause-netbsd.LICENSE",
    "bsd-2-clause-netbsd.LICENSE.txt",
    "bsd-3-clause-no-change.LICENSE",
    "bsd-3-clause-no-change.LICENSE.txt",
    "bsd-3-clause-no-trademark.LICENSE",
    "bsd-3-clause-no-trademark.LICENSE.txt",
    "bsd-4-clause-shortened.LICENSE",
    "bsd-4-clause-shortened.LICENSE.txt",
    "MIT.LICENSE",
    "MIT.LICENSE.txt",
];

/// Metadata file names carrying package descriptors.
pub const METADATA_FILE_NAMES: &[&str] = &["METADATA", "METADATA.txt"];

/// Scan-root nesting profiles, classified by total path segment count.
///
/// Each profile maps to the segment index holding the dependency's
/// `<name>-<version>.dist-info` directory. Paths with fewer than five
/// segments have no profile and are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NestingProfile {
    /// Five segments, e.g. `venv/lib/python3.9/pkg-1.0.dist-info/LICENSE`.
    Flat,
    /// Six segments, the common `venv/lib/pythonX.Y/site-packages/...` case.
    SitePackages,
    /// Seven or more segments: the project directory itself is nested.
    Deep,
}

impl NestingProfile {
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            5 => Some(NestingProfile::Flat),
            6 => Some(NestingProfile::SitePackages),
            d if d > 6 => Some(NestingProfile::Deep),
            _ => None,
        }
    }

    /// Index of the `<name>-<version>.dist-info` segment for this profile.
    pub fn package_segment(self) -> usize {
        match self {
            NestingProfile::Flat => 3,
            NestingProfile::SitePackages => 4,
            NestingProfile::Deep => 5,
        }
    }
}

/// Attribution evidence accumulated for one required package.
///
/// `package_name` is always present once evidence exists; the record is
/// writable to the NOTICE file only when `license_name` is also known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessedPackage {
    pub package_name: String,
    pub version: Option<String>,
    pub homepage_url: Option<String>,
    pub license_name: Option<String>,
    pub license_path: Option<String>,
    pub license_content: Option<String>,
}

impl ProcessedPackage {
    /// Whether the record carries enough data for a NOTICE block.
    pub fn is_complete(&self) -> bool {
        self.license_name.is_some()
    }
}

/// Search the scan report for license/metadata evidence matching `key`.
///
/// Returns `None` when no record's derived package name equals the key.
/// The license name is taken from the first matching record (upper-cased)
/// and never overwritten; later LICENSE records overwrite the license path,
/// later METADATA records overwrite version and homepage. License text is
/// not loaded here; the caller reads it from the returned `license_path`.
pub fn collect_package_evidence(
    report: &ScanReport,
    key: &str,
    display_name: &str,
    strip_path_prefix: Option<&str>,
) -> Option<ProcessedPackage> {
    let mut evidence: Option<ProcessedPackage> = None;

    for entry in &report.files {
        let segments: Vec<&str> = entry.path.split('/').collect();
        let Some(&file_name) = segments.last() else {
            continue;
        };

        let is_license = LICENSE_FILE_NAMES.contains(&file_name);
        let is_metadata = METADATA_FILE_NAMES.contains(&file_name);
        if !is_license && !is_metadata {
            continue;
        }

        let Some(profile) = NestingProfile::from_depth(segments.len()) else {
            continue;
        };
        let (name, version) = split_package_segment(segments[profile.package_segment()]);
        if name != key {
            continue;
        }

        let package = evidence.get_or_insert_with(|| ProcessedPackage {
            package_name: display_name.to_string(),
            license_name: entry.licenses.first().map(|tag| tag.key.to_uppercase()),
            ..ProcessedPackage::default()
        });

        if is_metadata {
            package.version = Some(version.to_string());
            if let Some(descriptor) = entry.packages.first() {
                package.homepage_url = Some(resolve_homepage(descriptor));
            }
        }

        if is_license {
            package.license_path = Some(strip_leading_segment(&entry.path, strip_path_prefix));
        }
    }

    evidence
}

/// Strip the trailing `.dist-info` marker and split `<name>-<version>` on
/// the final hyphen. A segment without a hyphen yields an empty version.
fn split_package_segment(segment: &str) -> (&str, &str) {
    let trimmed = segment.strip_suffix(".dist-info").unwrap_or(segment);
    match trimmed.rsplit_once('-') {
        Some((name, version)) => (name, version),
        None => (trimmed, ""),
    }
}

/// Prefer a GitHub-hosted VCS URL over a non-GitHub homepage. The VCS field
/// is typically `"git https://github.com/org/repo"`, so the last
/// whitespace-delimited token is the usable URL.
fn resolve_homepage(descriptor: &PackageDescriptor) -> String {
    let homepage = descriptor.homepage_url.clone().unwrap_or_default();
    let vcs = descriptor.vcs_url.as_deref().unwrap_or("");

    if !homepage.is_empty() && !homepage.contains("github") && vcs.contains("github") {
        if let Some(token) = vcs.split_whitespace().last() {
            return token.to_string();
        }
    }

    homepage
}

/// Drop a known leading path segment so license paths resolve relative to
/// the directory the reconciler runs from.
fn strip_leading_segment(path: &str, prefix: Option<&str>) -> String {
    if let Some(prefix) = prefix {
        if let Some(rest) = path.strip_prefix(prefix) {
            return rest.trim_start_matches('/').to_string();
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use noticeguard_test_util::{scan_file, scan_file_with_package, scan_report_json};
    use noticeguard_types::ScanReport;

    fn report(files: &[serde_json::Value]) -> ScanReport {
        serde_json::from_str(&scan_report_json(files)).expect("valid report")
    }

    #[test]
    fn nesting_profiles_by_depth() {
        assert_eq!(NestingProfile::from_depth(4), None);
        assert_eq!(NestingProfile::from_depth(5), Some(NestingProfile::Flat));
        assert_eq!(
            NestingProfile::from_depth(6),
            Some(NestingProfile::SitePackages)
        );
        assert_eq!(NestingProfile::from_depth(7), Some(NestingProfile::Deep));
        assert_eq!(NestingProfile::from_depth(12), Some(NestingProfile::Deep));

        assert_eq!(NestingProfile::Flat.package_segment(), 3);
        assert_eq!(NestingProfile::SitePackages.package_segment(), 4);
        assert_eq!(NestingProfile::Deep.package_segment(), 5);
    }

    #[test]
    fn depth_five_extracts_segment_three() {
        let report = report(&[scan_file("a/b/c/pkg_name-1.2.3.dist-info/LICENSE", &["mit"])]);
        let package = collect_package_evidence(&report, "pkg_name", "pkg-name", None)
            .expect("evidence found");

        assert_eq!(package.package_name, "pkg-name");
        assert_eq!(package.license_name.as_deref(), Some("MIT"));
        assert_eq!(
            package.license_path.as_deref(),
            Some("a/b/c/pkg_name-1.2.3.dist-info/LICENSE")
        );
    }

    #[test]
    fn depth_six_extracts_segment_four() {
        let report = report(&[scan_file(
            "venv/lib/python3.9/site-packages/pyyaml-5.4.1.dist-info/LICENSE",
            &["mit"],
        )]);
        assert!(collect_package_evidence(&report, "pyyaml", "PyYAML", None).is_some());
    }

    #[test]
    fn deep_paths_extract_segment_five() {
        let report = report(&[scan_file(
            "scan/project/venv/lib/python3.9/pyyaml-5.4.1.dist-info/extra/LICENSE",
            &["mit"],
        )]);
        assert!(collect_package_evidence(&report, "pyyaml", "PyYAML", None).is_some());
    }

    #[test]
    fn shallow_paths_are_ignored() {
        let report = report(&[scan_file("a/pyyaml-5.4.1.dist-info/LICENSE", &["mit"])]);
        assert!(collect_package_evidence(&report, "pyyaml", "PyYAML", None).is_none());
    }

    #[test]
    fn unrecognized_file_names_are_ignored() {
        let report = report(&[scan_file(
            "venv/lib/python3.9/site-packages/pyyaml-5.4.1.dist-info/RECORD",
            &["mit"],
        )]);
        assert!(collect_package_evidence(&report, "pyyaml", "PyYAML", None).is_none());
    }

    #[test]
    fn version_splits_on_final_hyphen() {
        let (name, version) = split_package_segment("zope-event-4.5.0.dist-info");
        assert_eq!(name, "zope-event");
        assert_eq!(version, "4.5.0");

        let (name, version) = split_package_segment("pyyaml-5.4.1.dist-info");
        assert_eq!(name, "pyyaml");
        assert_eq!(version, "5.4.1");

        let (name, version) = split_package_segment("standalone.dist-info");
        assert_eq!(name, "standalone");
        assert_eq!(version, "");
    }

    #[test]
    fn metadata_and_license_records_fill_the_full_record() {
        let base = "venv/lib/python3.9/site-packages/requests-2.31.0.dist-info";
        let report = report(&[
            scan_file(&format!("{base}/LICENSE"), &["apache-2.0"]),
            scan_file_with_package(
                &format!("{base}/METADATA"),
                &["apache-2.0"],
                Some("https://requests.readthedocs.io"),
                Some("git https://github.com/psf/requests"),
            ),
        ]);

        let package =
            collect_package_evidence(&report, "requests", "requests", None).expect("evidence");
        assert_eq!(package.package_name, "requests");
        assert_eq!(package.version.as_deref(), Some("2.31.0"));
        assert_eq!(package.license_name.as_deref(), Some("APACHE-2.0"));
        assert_eq!(
            package.homepage_url.as_deref(),
            Some("https://github.com/psf/requests")
        );
        assert_eq!(package.license_path.as_deref(), Some(format!("{base}/LICENSE").as_str()));
        assert!(package.license_content.is_none());
        assert!(package.is_complete());
    }

    #[test]
    fn github_homepage_is_not_substituted() {
        let report = report(&[scan_file_with_package(
            "venv/lib/python3.9/site-packages/pkg-1.0.dist-info/METADATA",
            &["mit"],
            Some("https://github.com/org/pkg"),
            Some("git https://github.com/org/mirror"),
        )]);
        let package = collect_package_evidence(&report, "pkg", "pkg", None).expect("evidence");
        assert_eq!(
            package.homepage_url.as_deref(),
            Some("https://github.com/org/pkg")
        );
    }

    #[test]
    fn empty_homepage_is_kept_empty() {
        let report = report(&[scan_file_with_package(
            "venv/lib/python3.9/site-packages/pkg-1.0.dist-info/METADATA",
            &["mit"],
            None,
            Some("git https://github.com/org/pkg"),
        )]);
        let package = collect_package_evidence(&report, "pkg", "pkg", None).expect("evidence");
        assert_eq!(package.homepage_url.as_deref(), Some(""));
    }

    #[test]
    fn license_name_comes_from_first_matching_record_only() {
        let base = "venv/lib/python3.9/site-packages/pkg-1.0.dist-info";
        let report = report(&[
            scan_file(&format!("{base}/METADATA"), &[]),
            scan_file(&format!("{base}/LICENSE"), &["mit"]),
        ]);

        let package = collect_package_evidence(&report, "pkg", "pkg", None).expect("evidence");
        // The first matching record had no license tag; that decision sticks.
        assert!(package.license_name.is_none());
        assert!(!package.is_complete());
    }

    #[test]
    fn leading_segment_is_stripped_from_license_path() {
        let report = report(&[scan_file(
            "my-project/venv/lib/python3.9/pkg-1.0.dist-info/LICENSE",
            &["mit"],
        )]);
        let package = collect_package_evidence(&report, "pkg", "pkg", Some("my-project"))
            .expect("evidence");
        assert_eq!(
            package.license_path.as_deref(),
            Some("venv/lib/python3.9/pkg-1.0.dist-info/LICENSE")
        );
    }

    #[test]
    fn other_packages_do_not_match() {
        let report = report(&[scan_file(
            "venv/lib/python3.9/site-packages/pyyaml-5.4.1.dist-info/LICENSE",
            &["mit"],
        )]);
        assert!(collect_package_evidence(&report, "requests", "requests", None).is_none());
    }
}
