//! Rendering of NOTICE attribution blocks.

use noticeguard_domain::ProcessedPackage;
use noticeguard_repo::NOTICE_SEPARATOR_LEN;
use noticeguard_types::ReconcileError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Render one attribution block, appended verbatim to the NOTICE file.
///
/// Optional fields render as empty strings so every block carries the same
/// header lines. The leading blank lines separate the block from whatever
/// the ledger currently ends with.
pub fn render_notice_block(
    package: &ProcessedPackage,
    written_at: OffsetDateTime,
) -> Result<String, ReconcileError> {
    let timestamp = written_at.format(&TIMESTAMP_FORMAT)?;
    let separator = "-".repeat(NOTICE_SEPARATOR_LEN);

    let version = package.version.as_deref().unwrap_or("");
    let homepage = package.homepage_url.as_deref().unwrap_or("");
    let license_name = package.license_name.as_deref().unwrap_or("");
    let license_path = package.license_path.as_deref().unwrap_or("");
    let license_content = package.license_content.as_deref().unwrap_or("");

    Ok(format!(
        "\n\n{separator}\n\
         Package: {name}\n\
         Version: {version}\n\
         Homepage: {homepage}\n\
         Time: {timestamp}\n\
         License: {license_name}\n\
         \n\n\
         Contents of probable licence file {license_path}: \n\n\
         {license_content}",
        name = package.package_name,
    ))
}
