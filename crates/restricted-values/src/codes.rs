//! Textual codes, tokens and tags.

use once_cell::sync::Lazy;
use regex::Regex;
use restricted_core::{restricted_value, AsciiText};

/// Longest [`AlphaNumericCode`].
pub const ALPHANUMERIC_CODE_MAX_LENGTH: usize = 32;
/// Longest [`AsciiToken`].
pub const ASCII_TOKEN_MAX_LENGTH: usize = 4096;
/// Shortest [`Tag`].
pub const TAG_MIN_LENGTH: usize = 2;
/// Longest [`Tag`].
pub const TAG_MAX_LENGTH: usize = 120;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9:/()-]*[a-z0-9]$").expect("invalid regex"));

fn is_alphanumeric_code(value: &AsciiText) -> bool {
    (1..=ALPHANUMERIC_CODE_MAX_LENGTH).contains(&value.len())
        && value.as_str().bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_ascii_token(value: &AsciiText) -> bool {
    (1..=ASCII_TOKEN_MAX_LENGTH).contains(&value.len())
        && value.as_str().bytes().all(|b| b.is_ascii_graphic())
}

fn is_tag(value: &AsciiText) -> bool {
    (TAG_MIN_LENGTH..=TAG_MAX_LENGTH).contains(&value.len()) && TAG_PATTERN.is_match(value.as_str())
}

fn to_lower(value: AsciiText) -> AsciiText {
    value.to_ascii_lowercase()
}

restricted_value! {
    /// Case-sensitive code of 1 to 32 ASCII letters and digits, ordered by ordinal comparison.
    pub struct AlphaNumericCode(AsciiText);
    level = ordinal;
    zero_valid = false;
    validate = is_alphanumeric_code;
    normalize = ::core::convert::identity;
    codec(max_text = ALPHANUMERIC_CODE_MAX_LENGTH, max_bytes = ALPHANUMERIC_CODE_MAX_LENGTH);
}

restricted_value! {
    /// Opaque token of 1 to 4096 visible ASCII characters (no spaces).
    pub struct AsciiToken(AsciiText);
    level = nominal;
    zero_valid = false;
    validate = is_ascii_token;
    normalize = ::core::convert::identity;
    codec(max_text = ASCII_TOKEN_MAX_LENGTH, max_bytes = ASCII_TOKEN_MAX_LENGTH);
}

restricted_value! {
    /// Lower-case label such as `reading-age` or `cohort(2024):pilot`.
    ///
    /// Starts and ends with a letter or digit; inner characters may also be
    /// `-`, `:`, `/`, `(` or `)`. Input is folded to lower case.
    pub struct Tag(AsciiText);
    level = nominal;
    zero_valid = false;
    validate = is_tag;
    normalize = to_lower;
    codec(max_text = TAG_MAX_LENGTH, max_bytes = TAG_MAX_LENGTH);
}

impl AlphaNumericCode {
    /// Borrows the code text; `None` for the sentinel.
    pub fn as_str(&self) -> Option<&str> {
        self.slot.get().map(AsciiText::as_str)
    }
}

impl AsciiToken {
    /// Borrows the token text; `None` for the sentinel.
    pub fn as_str(&self) -> Option<&str> {
        self.slot.get().map(AsciiText::as_str)
    }
}

impl Tag {
    /// Borrows the tag text; `None` for the sentinel.
    pub fn as_str(&self) -> Option<&str> {
        self.slot.get().map(AsciiText::as_str)
    }
}
