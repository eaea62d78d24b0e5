//! Column converters for persisted values.
//!
//! Text columns use the default format and the invariant locale so stored
//! values never depend on the writer's culture. Binary columns hold the same
//! text as UTF-8. The uninitialized sentinel maps to a null column.

use crate::codec::SpanCodec;
use crate::errors::{FormatIntoError, ParseError};
use crate::format::Format;
use crate::locale::Locale;

/// Storage round-trip for any [`SpanCodec`] type.
pub trait ColumnCodec: SpanCodec {
    /// Canonical text for a text column.
    fn to_column_text(&self) -> Result<String, FormatIntoError> {
        self.to_text(Format::Default, &Locale::INVARIANT)
    }

    /// Reads a text column.
    fn from_column_text(text: &str) -> Result<Self, ParseError> {
        Self::parse(text, &Locale::INVARIANT)
    }

    /// Canonical UTF-8 bytes for a binary column.
    fn to_column_bytes(&self) -> Result<Vec<u8>, FormatIntoError> {
        self.to_column_text().map(String::into_bytes)
    }

    /// Reads a binary column.
    fn from_column_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        Self::parse_utf8(bytes, &Locale::INVARIANT)
    }

    /// Text for a nullable column; `None` for the sentinel.
    fn to_nullable_column_text(&self) -> Result<Option<String>, FormatIntoError> {
        if !self.is_initialized() {
            return Ok(None);
        }
        self.to_column_text().map(Some)
    }

    /// Reads a nullable column; null yields `Default`.
    fn from_nullable_column_text(text: Option<&str>) -> Result<Self, ParseError> {
        text.map_or_else(|| Ok(Self::default()), Self::from_column_text)
    }
}

impl<T: SpanCodec> ColumnCodec for T {}
