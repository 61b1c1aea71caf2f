//! CLI entry point for noticeguard.
//!
//! This binary is intentionally thin: it handles argument parsing, terminal
//! messages, and exit codes. All reconciliation logic lives in the
//! `noticeguard-app` crate.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use noticeguard_app::{run_reconcile, ReconcileInput};
use noticeguard_remote::HttpProbe;
use noticeguard_types::{outcome_exit_code, Outcome};

/// Requirement manifests reconciled on every run, in load order.
const REQUIREMENT_FILES: &[&str] = &[
    "requirements.txt",
    "requirements-lint.txt",
    "requirements-tests.txt",
];

/// The attribution ledger, resolved against the working directory.
const NOTICE_FILE: &str = "NOTICE.txt";

#[derive(Parser, Debug)]
#[command(
    name = "noticeguard",
    version,
    about = "Reconcile requirement manifests against the NOTICE attribution ledger"
)]
struct Cli {
    /// Path to the license-scan report JSON (scancode output).
    #[arg(long, short = 'f')]
    scan_report: Utf8PathBuf,

    /// Reconciliation mode: `check` reports new packages, `fix` appends
    /// their attribution blocks to the NOTICE file.
    #[arg(long, short = 'm')]
    mode: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let requirement_files: Vec<Utf8PathBuf> =
        REQUIREMENT_FILES.iter().copied().map(Utf8PathBuf::from).collect();

    let input = ReconcileInput {
        requirement_files: &requirement_files,
        scan_report_path: &cli.scan_report,
        notice_path: Utf8Path::new(NOTICE_FILE),
        mode: &cli.mode,
        strip_path_prefix: None,
    };

    let probe = HttpProbe::new();

    match run_reconcile(&input, &probe) {
        Ok(outcome) => {
            if let Outcome::CheckReport { .. } = outcome {
                eprintln!(
                    "New packages found. Run the program in 'fix' mode to add them to {NOTICE_FILE}"
                );
            }
            let code = outcome_exit_code(&outcome);
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("noticeguard error: {err}");
            std::process::exit(1);
        }
    }
}
