//! Use case orchestration for noticeguard.
//!
//! This crate coordinates the domain, repo, and remote layers into the
//! reconciliation run. The CLI crate depends on this; it only handles
//! argument parsing, terminal messages, and exit codes.

#![forbid(unsafe_code)]

mod reconcile;
mod render;

pub use reconcile::{run_reconcile, ReconcileInput};
pub use render::render_notice_block;
