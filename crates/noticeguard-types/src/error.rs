//! Fatal error taxonomy for a reconciliation run.
//!
//! Only conditions that abort the whole run live here. Recoverable
//! conditions (no scan evidence for a package, incomplete package data,
//! a missed remote candidate) are reported inline and skipped by the
//! driver, never raised as errors.

use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// A requirement manifest could not be read; all manifests are required.
    #[error("requirement manifest {path} could not be read: {source}")]
    ManifestMissing {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan report file exists but contains nothing to parse.
    #[error("scan report {path} is empty")]
    ScanReportEmpty { path: Utf8PathBuf },

    /// The scan report is not valid JSON of the expected shape.
    #[error("scan report {path} is not valid: {source}")]
    ScanReportInvalid {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A package is recorded in the NOTICE ledger but no requirement
    /// declares it. The ledger is treated as corrupted.
    #[error("package '{package}' exists in the NOTICE file, but not in requirements")]
    LedgerInconsistency { package: String },

    /// The requested mode is neither `check` nor `fix`.
    #[error("invalid mode '{0}': choose a mode between 'fix' or 'check'")]
    InvalidMode(String),

    #[error("{path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("format timestamp: {0}")]
    TimestampFormat(#[from] time::error::Format),
}
