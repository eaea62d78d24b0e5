//! Repeatable hashing for content addressing and deduplication.
//!
//! The hash is xxh3-64 over the canonical UTF-8 text (default format,
//! invariant locale) with a compiled-in seed, so the same canonical text
//! hashes the same in every process. It is not collision resistant against
//! chosen input; layer [`content_digest`](crate::digest::content_digest) on
//! top where that matters. It is unrelated to the `Hash` impl used by
//! in-memory maps.

use std::fmt;

use xxhash_rust::xxh3::{xxh3_64_with_seed, Xxh3};

use crate::codec::SpanCodec;
use crate::errors::UninitializedValueError;
use crate::format::Format;
use crate::locale::Locale;

/// Seed mixed into every repeatable hash (`"RESTRICT"` in ASCII).
pub const REPEATABLE_HASH_SEED: u64 = 0x5245_5354_5249_4354;

/// Streaming repeatable hasher; also a [`fmt::Write`] sink.
pub struct RepeatableHasher {
    state: Xxh3,
}

impl RepeatableHasher {
    /// Hasher seeded with [`REPEATABLE_HASH_SEED`].
    pub fn new() -> Self {
        Self {
            state: Xxh3::with_seed(REPEATABLE_HASH_SEED),
        }
    }

    /// Feeds raw bytes.
    pub fn update(&mut self, bytes: &[u8]) {
        self.state.update(bytes);
    }

    /// Feeds a `u64` as little-endian bytes.
    pub fn write_u64(&mut self, value: u64) {
        self.state.update(&value.to_le_bytes());
    }

    /// Digest of everything fed so far.
    pub fn finish(&self) -> u64 {
        self.state.digest()
    }
}

impl Default for RepeatableHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RepeatableHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatableHasher").finish_non_exhaustive()
    }
}

impl fmt::Write for RepeatableHasher {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.update(s.as_bytes());
        Ok(())
    }
}

/// Repeatable hash of raw bytes.
pub fn repeatable_hash_bytes(bytes: &[u8]) -> u64 {
    xxh3_64_with_seed(bytes, REPEATABLE_HASH_SEED)
}

/// Repeatable hash of text; equals the value hash of its canonical form.
pub fn repeatable_hash_str(text: &str) -> u64 {
    repeatable_hash_bytes(text.as_bytes())
}

/// Order-sensitive combination of two repeatable hashes.
pub fn combine(first: u64, second: u64) -> u64 {
    let mut hasher = RepeatableHasher::new();
    hasher.write_u64(first);
    hasher.write_u64(second);
    hasher.finish()
}

/// Cross-process stable hash of a value's canonical bytes.
pub trait RepeatableHash {
    /// Hash of the canonical text; fails on the uninitialized sentinel.
    fn repeatable_hash(&self) -> Result<u64, UninitializedValueError>;
}

impl<T: SpanCodec> RepeatableHash for T {
    fn repeatable_hash(&self) -> Result<u64, UninitializedValueError> {
        let mut hasher = RepeatableHasher::new();
        feed_canonical(self, &mut hasher)?;
        Ok(hasher.finish())
    }
}

/// Repeatable hash that also covers the type name, for stores mixing types.
pub fn typed_fingerprint<T: SpanCodec>(value: &T) -> Result<u64, UninitializedValueError> {
    let mut hasher = RepeatableHasher::new();
    hasher.update(T::NAME.as_bytes());
    hasher.update(&[0]);
    feed_canonical(value, &mut hasher)?;
    Ok(hasher.finish())
}

pub(crate) fn feed_canonical<T: SpanCodec>(
    value: &T,
    out: &mut dyn fmt::Write,
) -> Result<(), UninitializedValueError> {
    let repr = value.value()?;
    // Sinks used here never fail.
    let _ = T::encode(repr, out, Format::Default, &Locale::INVARIANT);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streaming_matches_one_shot() {
        let mut hasher = RepeatableHasher::new();
        hasher.update(b"10");
        hasher.update(b"00 mm");
        assert_eq!(hasher.finish(), repeatable_hash_str("1000 mm"));
    }

    #[test]
    fn combine_is_order_sensitive() {
        let a = repeatable_hash_str("CA");
        let b = repeatable_hash_str("US");
        assert_ne!(combine(a, b), combine(b, a));
        assert_eq!(combine(a, b), combine(a, b));
    }

    #[test]
    fn seed_changes_output() {
        assert_ne!(
            repeatable_hash_str("CA"),
            xxhash_rust::xxh3::xxh3_64(b"CA")
        );
    }
}
