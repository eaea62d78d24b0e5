//! Prefixed opaque identifiers such as `cus_MBvF2uhJkOAcKF`.

use restricted_core::{restricted_value, AsciiText};

/// Shortest id part, excluding the prefix.
pub const IDENTIFIER_MIN_ID_LENGTH: usize = 12;
/// Longest id part, excluding the prefix.
pub const IDENTIFIER_MAX_ID_LENGTH: usize = 256;
/// Shortest prefix.
pub const IDENTIFIER_MIN_PREFIX_LENGTH: usize = 2;
/// Longest prefix.
pub const IDENTIFIER_MAX_PREFIX_LENGTH: usize = 23;
/// Longest identifier, prefix and delimiter included.
pub const IDENTIFIER_MAX_LENGTH: usize = IDENTIFIER_MAX_PREFIX_LENGTH + IDENTIFIER_MAX_ID_LENGTH;
/// Separates the prefix from the id; the last occurrence wins.
pub const PREFIX_DELIMITER: char = '_';

fn split(text: &str) -> (Option<&str>, &str) {
    match text.rsplit_once(PREFIX_DELIMITER) {
        Some((prefix, id)) => (Some(prefix), id),
        None => (None, text),
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    (IDENTIFIER_MIN_PREFIX_LENGTH..=IDENTIFIER_MAX_PREFIX_LENGTH).contains(&prefix.len())
        && !prefix.starts_with(PREFIX_DELIMITER)
        && prefix.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn is_identifier(value: &AsciiText) -> bool {
    let (prefix, id) = split(value.as_str());
    value.len() <= IDENTIFIER_MAX_LENGTH
        && prefix.map_or(true, is_valid_prefix)
        && (IDENTIFIER_MIN_ID_LENGTH..=IDENTIFIER_MAX_ID_LENGTH).contains(&id.len())
        && id.bytes().all(|b| b.is_ascii_alphanumeric())
}

restricted_value! {
    /// Case-sensitive identifier: an optional prefix and `_`, then 12 to 256
    /// ASCII letters and digits.
    ///
    /// The prefix is 2 to 23 letters, digits or underscores and does not
    /// start with `_`.
    pub struct Identifier(AsciiText);
    level = nominal;
    zero_valid = false;
    validate = is_identifier;
    normalize = ::core::convert::identity;
    codec(max_text = IDENTIFIER_MAX_LENGTH, max_bytes = IDENTIFIER_MAX_LENGTH);
}

impl Identifier {
    /// Borrows the identifier text; `None` for the sentinel.
    pub fn as_str(&self) -> Option<&str> {
        self.slot.get().map(AsciiText::as_str)
    }

    /// Splits into prefix (if any) and id; `None` for the sentinel.
    pub fn parts(&self) -> Option<(Option<&str>, &str)> {
        self.as_str().map(split)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(text: &str) -> bool {
        is_identifier(&AsciiText::new(text).unwrap())
    }

    #[test]
    fn prefix_rules() {
        assert!(valid("cus_MBvF2uhJkOAcKF"));
        assert!(valid("org_team_0123456789ab"));
        assert!(!valid("c_0123456789ab"));
        assert!(!valid("_0123456789ab"));
        assert!(!valid("__x_0123456789ab"));
        assert!(!valid(&format!("{}_0123456789ab", "p".repeat(24))));
        assert!(valid(&format!("{}_0123456789ab", "p".repeat(23))));
    }

    #[test]
    fn id_rules() {
        assert!(valid("0123456789ab"));
        assert!(!valid("0123456789a"));
        assert!(!valid("0123456789ab-"));
        assert!(!valid("cus_"));
        assert!(valid(&"x".repeat(IDENTIFIER_MAX_ID_LENGTH)));
        assert!(!valid(&"x".repeat(IDENTIFIER_MAX_ID_LENGTH + 1)));
        let longest_prefix = "p".repeat(IDENTIFIER_MAX_PREFIX_LENGTH);
        let longest_id = "x".repeat(IDENTIFIER_MAX_ID_LENGTH);
        assert!(!valid(&format!("{longest_prefix}_{longest_id}")));
        assert!(valid(&format!("{longest_prefix}_{}", &longest_id[1..])));
    }
}
