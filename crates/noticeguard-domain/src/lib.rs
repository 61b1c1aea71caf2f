//! Pure reconciliation logic (no IO).
//!
//! Input: requirement manifest text, scan-report records, NOTICE ledger text.
//! Output: normalized requirement maps, package evidence, ledger diffs.

#![forbid(unsafe_code)]

pub mod ledger;
pub mod matcher;
pub mod requirements;

pub use ledger::{diff_new_packages, find_unrequired_package, recorded_packages};
pub use matcher::{collect_package_evidence, NestingProfile, ProcessedPackage};
pub use requirements::collect_requirements;
