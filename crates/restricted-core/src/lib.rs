//! Restricted value primitives.
//!
//! A restricted value is an immutable scalar that pairs an underlying
//! representation with a validity predicate. This crate provides the
//! contract every such type implements ([`RestrictedValue`]), its text and
//! UTF-8 codec ([`SpanCodec`]), the measurement-level lattice
//! ([`Nominal`] ⊂ [`Ordinal`] ⊂ [`Interval`] ⊂ [`Ratio`]), the cross-process
//! [`RepeatableHash`], and the [`restricted_value!`] macro that declares
//! concrete types.
//!
#![deny(missing_docs)]

/// Serde adapters used by declared types.
pub mod adapters;
/// Span text codec and buffer sinks.
pub mod codec;
/// Validated construction and the uninitialized guard.
pub mod contract;
/// Character cursor shared by the parse paths.
pub mod cursor;
/// SHA-256 content digests.
pub mod digest;
/// Error taxonomy.
pub mod errors;
/// Format selectors.
pub mod format;
/// Repeatable 64-bit hashing.
pub mod hash;
/// Concurrent string interning.
pub mod intern;
/// Measurement-level traits and checked arithmetic.
pub mod level;
/// Culture descriptors.
pub mod locale;
mod macros;
/// Underlying representations.
pub mod repr;
/// Storage column converters.
pub mod storage;

pub use codec::{ByteWriter, CharWriter, CountingWriter, SpanCodec, TextLength};
pub use contract::{RestrictedValue, Slot, Validated};
pub use cursor::{Cursor, DecodeError};
pub use digest::{content_digest, verify_content_digest, Digest, DigestAlg};
pub use errors::{
    FormatError, FormatErrorKind, FormatIntoError, ParseError, UninitializedValueError,
    ValidationError, ValueError,
};
pub use format::Format;
pub use hash::{
    combine, repeatable_hash_bytes, repeatable_hash_str, typed_fingerprint, RepeatableHash,
    RepeatableHasher, REPEATABLE_HASH_SEED,
};
pub use intern::StringPool;
pub use level::{Interval, MeasurementLevel, Nominal, Ordinal, Ratio};
pub use locale::Locale;
pub use repr::{
    AsciiChars, AsciiText, FixedPoint, IntervalRepr, RatioRepr, Representation, TextRepr,
};
pub use storage::ColumnCodec;

/// Re-exports for macro expansion in downstream crates.
#[doc(hidden)]
pub mod __private {
    pub use serde;
}
