//! Stable data types used across the noticeguard workspace.
//!
//! This crate is intentionally boring:
//! - serde DTOs for the license-scan report
//! - the reconciliation mode and outcome types
//! - the error taxonomy shared by the adapter and app layers

#![forbid(unsafe_code)]

pub mod error;
pub mod mode;
pub mod scan;

pub use error::ReconcileError;
pub use mode::{outcome_exit_code, Outcome};
pub use scan::{LicenseTag, PackageDescriptor, ScanFile, ScanReport};
