//! NOTICE ledger IO: read-or-initialize, append, and license file reads.

use camino::{Utf8Path, Utf8PathBuf};
use noticeguard_types::ReconcileError;
use std::io::Write;

/// Width of the `=`/`-` separator lines in the NOTICE file.
pub const NOTICE_SEPARATOR_LEN: usize = 100;

fn default_header() -> String {
    let bar = "=".repeat(NOTICE_SEPARATOR_LEN);
    format!("Third party notices\n{bar}\nThird party libraries bundled with this project:\n{bar}")
}

/// Read the NOTICE ledger, creating it with the fixed header when absent.
/// Returns the full text content.
pub fn load_or_init_notice(path: &Utf8Path) -> Result<String, ReconcileError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let header = default_header();
            std::fs::write(path, &header).map_err(|source| ReconcileError::Io {
                path: path.to_owned(),
                source,
            })?;
            Ok(header)
        }
        Err(source) => Err(ReconcileError::Io {
            path: path.to_owned(),
            source,
        }),
    }
}

/// Append one rendered attribution block. Each append is independently
/// persisted; there is no rollback of earlier blocks.
pub fn append_notice_block(path: &Utf8Path, block: &str) -> Result<(), ReconcileError> {
    let io_err = |source| ReconcileError::Io {
        path: path.to_owned(),
        source,
    };
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    file.write_all(block.as_bytes()).map_err(io_err)
}

/// Read a license file's verbatim text as attribution evidence.
pub fn read_license_text(path: &str) -> Result<String, ReconcileError> {
    std::fs::read_to_string(path).map_err(|source| ReconcileError::Io {
        path: Utf8PathBuf::from(path.to_owned()),
        source,
    })
}
