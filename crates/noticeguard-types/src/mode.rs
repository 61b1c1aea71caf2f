//! Terminal outcomes of a reconciliation run and their exit-code mapping.
//!
//! The driver returns an [`Outcome`] instead of terminating the process;
//! the CLI boundary decides what each outcome means for the exit status.

/// Terminal state of a successful (non-fatal) run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Required and recorded package sets already match; nothing written.
    NoChanges,
    /// Check mode: the new packages that would need NOTICE entries.
    ///
    /// Reaching this outcome is always a failing condition for the caller,
    /// even when `new_packages` is empty: check mode never confirms a clean
    /// state on its own, that is what [`Outcome::NoChanges`] is for.
    CheckReport { new_packages: Vec<String> },
    /// Fix mode ran to completion; some packages may have been skipped.
    FixApplied {
        added: Vec<String>,
        skipped: Vec<String>,
    },
}

/// Map an outcome to a process exit code: 0 = clean, 2 = action required.
pub fn outcome_exit_code(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::NoChanges => 0,
        Outcome::CheckReport { .. } => 2,
        Outcome::FixApplied { .. } => 0,
    }
}
