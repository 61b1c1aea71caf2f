//! The reconciliation driver.
//!
//! Sequential run: load manifests and the scan report, read (or create)
//! the NOTICE ledger, diff required against recorded packages, then either
//! report (`check`) or append attribution blocks (`fix`). The driver
//! returns an [`Outcome`]; deciding process exit codes is the caller's job.

use camino::{Utf8Path, Utf8PathBuf};
use noticeguard_domain::{
    collect_package_evidence, diff_new_packages, find_unrequired_package, recorded_packages,
};
use noticeguard_remote::{resolve_license, LicenseProbe};
use noticeguard_repo::{
    append_notice_block, load_or_init_notice, read_license_text, read_requirement_manifests,
    read_scan_report,
};
use noticeguard_types::{Outcome, ReconcileError, ScanReport};
use std::collections::BTreeMap;
use time::OffsetDateTime;

use crate::render::render_notice_block;

/// Input for a reconciliation run.
#[derive(Clone, Debug)]
pub struct ReconcileInput<'a> {
    /// Requirement manifests, in load order. All must exist.
    pub requirement_files: &'a [Utf8PathBuf],
    /// License-scan report (scancode-style JSON).
    pub scan_report_path: &'a Utf8Path,
    /// NOTICE ledger, created with a fixed header when absent.
    pub notice_path: &'a Utf8Path,
    /// `check` or `fix`. Validated lazily, at dispatch.
    pub mode: &'a str,
    /// Leading path segment to drop from license paths found in the scan
    /// report, for scans rooted one directory above the reconciler.
    pub strip_path_prefix: Option<&'a str>,
}

/// Run the reconciliation. Progress and warnings go to stdout; fatal
/// conditions return early with no partial-write rollback.
pub fn run_reconcile(
    input: &ReconcileInput<'_>,
    probe: &dyn LicenseProbe,
) -> Result<Outcome, ReconcileError> {
    let required = read_requirement_manifests(input.requirement_files)?;
    let report = read_scan_report(input.scan_report_path)?;
    let notice_text = load_or_init_notice(input.notice_path)?;
    let recorded = recorded_packages(&notice_text);

    let mut required_names: Vec<&str> = required.values().map(String::as_str).collect();
    required_names.sort_unstable();

    if required_names.iter().copied().eq(recorded.iter().map(String::as_str)) {
        println!("There is no new package listed in the requirements files");
        return Ok(Outcome::NoChanges);
    }

    if let Some(package) = find_unrequired_package(&required, &recorded) {
        return Err(ReconcileError::LedgerInconsistency {
            package: package.to_string(),
        });
    }

    match input.mode {
        "check" => {
            let new_packages: Vec<String> = diff_new_packages(&required, &recorded)
                .into_iter()
                .map(|(_, display)| display.to_string())
                .collect();
            for name in &new_packages {
                println!("New package found: '{name}'");
            }
            Ok(Outcome::CheckReport { new_packages })
        }
        "fix" => run_fix(input, probe, &required, &report, &recorded),
        other => Err(ReconcileError::InvalidMode(other.to_string())),
    }
}

fn run_fix(
    input: &ReconcileInput<'_>,
    probe: &dyn LicenseProbe,
    required: &BTreeMap<String, String>,
    report: &ScanReport,
    recorded: &[String],
) -> Result<Outcome, ReconcileError> {
    let mut added = Vec::new();
    let mut skipped = Vec::new();

    for (key, display) in diff_new_packages(required, recorded) {
        println!("New package found: '{display}'");

        let Some(mut package) =
            collect_package_evidence(report, key, display, input.strip_path_prefix)
        else {
            println!(
                "Nothing has been found for package '{display}' in {}",
                input.scan_report_path
            );
            skipped.push(display.to_string());
            continue;
        };

        if let Some(license_path) = package.license_path.clone() {
            package.license_content = Some(read_license_text(&license_path)?);
        } else if let Some(homepage) = package.homepage_url.as_deref().filter(|h| !h.is_empty()) {
            if let Some(remote) = resolve_license(probe, homepage, key) {
                package.license_content = Some(remote.content);
                package.license_path = Some(remote.url);
            }
        }

        if !package.is_complete() {
            println!("Missing data for '{display}'. Skipping...");
            skipped.push(display.to_string());
            continue;
        }

        let block = render_notice_block(&package, OffsetDateTime::now_utc())?;
        append_notice_block(input.notice_path, &block)?;
        println!("Package '{display}' has been added to {}", input.notice_path);
        added.push(display.to_string());
    }

    Ok(Outcome::FixApplied { added, skipped })
}
