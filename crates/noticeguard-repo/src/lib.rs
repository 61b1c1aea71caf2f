//! Filesystem adapters: requirement manifests, scan reports, and the
//! NOTICE ledger.
//!
//! This crate is allowed to do filesystem IO. All reads and writes are
//! synchronous; the reconciliation run is strictly sequential.

#![forbid(unsafe_code)]

mod ledger;
mod manifest;

pub use ledger::{
    append_notice_block, load_or_init_notice, read_license_text, NOTICE_SEPARATOR_LEN,
};
pub use manifest::{read_requirement_manifests, read_scan_report};
