//! Serde adapters used by [`restricted_value!`](crate::restricted_value).
//!
//! Values serialize as their canonical text through a stack buffer sized by
//! the declaring type, and deserialize through the shared parse core.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::{self, Serializer};

use crate::codec::SpanCodec;
use crate::format::Format;
use crate::locale::Locale;

/// Serializes `value` as a string, formatting into `buffer`.
pub fn serialize_with_buffer<T, S>(
    value: &T,
    buffer: &mut [u8],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: SpanCodec,
    S: Serializer,
{
    let written = value
        .format_into(buffer, Format::Default, &Locale::INVARIANT)
        .map_err(ser::Error::custom)?;
    let text = std::str::from_utf8(&buffer[..written]).map_err(ser::Error::custom)?;
    serializer.serialize_str(text)
}

/// Deserializes a value from a string or UTF-8 bytes.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: SpanCodec,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(TextVisitor(PhantomData))
}

struct TextVisitor<T>(PhantomData<T>);

impl<'de, T: SpanCodec> Visitor<'de> for TextVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} in text form", T::NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        T::parse(v, &Locale::INVARIANT).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<T, E> {
        T::parse_utf8(v, &Locale::INVARIANT).map_err(E::custom)
    }
}
