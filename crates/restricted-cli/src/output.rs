//! Output formatting utilities.

use serde::Serialize;

use crate::registry::TypeInfo;

/// Formats any serializable report as JSON.
pub fn format_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a type description as a simple table row.
pub fn format_table_row(info: &TypeInfo) -> String {
    format!(
        "{:<20} {:<10} {:>9} {:>9} {}",
        info.name,
        info.level.as_str(),
        info.max_text_length,
        info.max_byte_length,
        if info.zero_is_valid { "yes" } else { "no" }
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<20} {:<10} {:>9} {:>9} {}",
        "TYPE", "LEVEL", "MAX_CHARS", "MAX_BYTES", "ZERO_VALID"
    );
    println!("{}", "-".repeat(64));
}

/// Formats a 64-bit hash as fixed-width lower-case hex.
pub fn format_hash(hash: u64) -> String {
    format!("{:016x}", hash)
}
