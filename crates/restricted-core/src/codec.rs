//! Span text codec: parsing from text or UTF-8 bytes and formatting into
//! caller-owned buffers.
//!
//! Both parse entry points funnel into one decode/validate core. Formatting
//! measures before writing, so a short buffer is rejected untouched.

use std::fmt;

use tracing::debug;

use crate::contract::RestrictedValue;
use crate::cursor::{Cursor, DecodeError};
use crate::errors::{FormatError, FormatErrorKind, FormatIntoError, ParseError};
use crate::format::Format;
use crate::locale::Locale;

/// Text and byte codec of a restricted value.
pub trait SpanCodec: RestrictedValue {
    /// Longest formatted text in characters, across all formats and locales.
    const MAX_TEXT_LENGTH: usize;
    /// Longest formatted text in UTF-8 bytes.
    const MAX_BYTE_LENGTH: usize;

    /// Decodes a representation starting at the cursor.
    fn decode(cursor: &mut Cursor<'_>, locale: &Locale) -> Result<Self::Repr, DecodeError>;

    /// Writes a representation in the requested format.
    ///
    /// May fail only when `out` does.
    fn encode(
        value: &Self::Repr,
        out: &mut dyn fmt::Write,
        format: Format<'_>,
        locale: &Locale,
    ) -> fmt::Result;

    /// Whether `format` is recognised by this type.
    fn supports_format(format: Format<'_>) -> bool {
        format.is_standard()
    }

    /// Decodes then validates `text`.
    fn parse(text: &str, locale: &Locale) -> Result<Self, ParseError> {
        parse_text(text, locale)
    }

    /// [`parse`](Self::parse) with the invariant locale.
    fn parse_invariant(text: &str) -> Result<Self, ParseError> {
        parse_text(text, &Locale::INVARIANT)
    }

    /// Never fails; `None` for either failure kind.
    fn try_parse(text: &str, locale: &Locale) -> Option<Self> {
        parse_text(text, locale).ok()
    }

    /// Decodes then validates UTF-8 bytes through the same core as [`parse`](Self::parse).
    fn parse_utf8(bytes: &[u8], locale: &Locale) -> Result<Self, ParseError> {
        if bytes.len() > Self::MAX_BYTE_LENGTH {
            let kind = FormatErrorKind::TooLong {
                max: Self::MAX_BYTE_LENGTH,
                actual: bytes.len(),
            };
            debug!(type_name = Self::NAME, len = bytes.len(), "rejected oversized input");
            let context = String::from_utf8_lossy(bytes);
            return Err(FormatError::new(Self::NAME, Self::MAX_BYTE_LENGTH, kind, &context).into());
        }
        let text = std::str::from_utf8(bytes).map_err(|err| {
            let context = String::from_utf8_lossy(bytes);
            FormatError::new(
                Self::NAME,
                err.valid_up_to(),
                FormatErrorKind::InvalidUtf8,
                &context,
            )
        })?;
        parse_text(text, locale)
    }

    /// Never fails; `None` for any failure.
    fn try_parse_utf8(bytes: &[u8], locale: &Locale) -> Option<Self> {
        Self::parse_utf8(bytes, locale).ok()
    }

    /// Writes the value to an arbitrary sink.
    fn write_text(
        &self,
        out: &mut dyn fmt::Write,
        format: Format<'_>,
        locale: &Locale,
    ) -> Result<(), FormatIntoError> {
        if !Self::supports_format(format) {
            return Err(FormatIntoError::UnsupportedFormat {
                type_name: Self::NAME,
                format: format.to_string(),
            });
        }
        let value = self.value()?;
        Self::encode(value, out, format, locale).map_err(|_| FormatIntoError::Sink)
    }

    /// Length of the formatted text in UTF-8 bytes and in characters.
    fn measure(&self, format: Format<'_>, locale: &Locale) -> Result<TextLength, FormatIntoError> {
        let mut counter = CountingWriter::default();
        self.write_text(&mut counter, format, locale)?;
        Ok(counter.length())
    }

    /// Formats into `buffer` as UTF-8 and returns the bytes written.
    ///
    /// A buffer shorter than the text is left untouched.
    fn format_into(
        &self,
        buffer: &mut [u8],
        format: Format<'_>,
        locale: &Locale,
    ) -> Result<usize, FormatIntoError> {
        let required = self.measure(format, locale)?.bytes;
        if required > buffer.len() {
            return Err(FormatIntoError::InsufficientBuffer {
                required,
                available: buffer.len(),
            });
        }
        let mut writer = ByteWriter::new(buffer);
        self.write_text(&mut writer, format, locale)?;
        Ok(writer.written())
    }

    /// Formats into a character buffer and returns the characters written.
    fn format_into_chars(
        &self,
        buffer: &mut [char],
        format: Format<'_>,
        locale: &Locale,
    ) -> Result<usize, FormatIntoError> {
        let required = self.measure(format, locale)?.chars;
        if required > buffer.len() {
            return Err(FormatIntoError::InsufficientBuffer {
                required,
                available: buffer.len(),
            });
        }
        let mut writer = CharWriter::new(buffer);
        self.write_text(&mut writer, format, locale)?;
        Ok(writer.written())
    }

    /// Allocates exactly the formatted length and formats into it.
    fn to_text(&self, format: Format<'_>, locale: &Locale) -> Result<String, FormatIntoError> {
        let length = self.measure(format, locale)?;
        let mut text = String::with_capacity(length.bytes);
        self.write_text(&mut text, format, locale)?;
        Ok(text)
    }
}

fn parse_text<T: SpanCodec>(text: &str, locale: &Locale) -> Result<T, ParseError> {
    // Byte length bounds character length from above.
    if text.len() > T::MAX_TEXT_LENGTH {
        let chars = text.chars().count();
        if chars > T::MAX_TEXT_LENGTH {
            debug!(type_name = T::NAME, len = chars, "rejected oversized input");
            let kind = FormatErrorKind::TooLong {
                max: T::MAX_TEXT_LENGTH,
                actual: chars,
            };
            return Err(FormatError::new(T::NAME, T::MAX_TEXT_LENGTH, kind, text).into());
        }
    }
    let mut cursor = Cursor::new(text);
    let repr = T::decode(&mut cursor, locale)
        .and_then(|repr| cursor.expect_end().map(|()| repr))
        .map_err(|err| {
            debug!(type_name = T::NAME, position = err.position, kind = %err.kind, "decode failed");
            err.into_format_error(T::NAME, text)
        })?;
    Ok(T::from_value(repr)?)
}

/// Formatted length in both units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextLength {
    /// UTF-8 bytes.
    pub bytes: usize,
    /// Characters.
    pub chars: usize,
}

/// Sink that only counts.
#[derive(Debug, Default)]
pub struct CountingWriter {
    length: TextLength,
}

impl CountingWriter {
    /// Length seen so far.
    pub fn length(&self) -> TextLength {
        self.length
    }
}

impl fmt::Write for CountingWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.length.bytes += s.len();
        self.length.chars += s.chars().count();
        Ok(())
    }
}

/// Sink over a byte slice; fails instead of truncating.
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buffer: &'a mut [u8],
    written: usize,
}

impl<'a> ByteWriter<'a> {
    /// Wraps `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, written: 0 }
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl fmt::Write for ByteWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.written + s.len();
        let target = self.buffer.get_mut(self.written..end).ok_or(fmt::Error)?;
        target.copy_from_slice(s.as_bytes());
        self.written = end;
        Ok(())
    }
}

/// Sink over a `char` slice; fails instead of truncating.
#[derive(Debug)]
pub struct CharWriter<'a> {
    buffer: &'a mut [char],
    written: usize,
}

impl<'a> CharWriter<'a> {
    /// Wraps `buffer`.
    pub fn new(buffer: &'a mut [char]) -> Self {
        Self { buffer, written: 0 }
    }

    /// Characters written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl fmt::Write for CharWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.chars().try_for_each(|c| fmt::Write::write_char(self, c))
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        let slot = self.buffer.get_mut(self.written).ok_or(fmt::Error)?;
        *slot = c;
        self.written += 1;
        Ok(())
    }
}
