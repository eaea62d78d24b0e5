//! Content digests: the collision-resistant counterpart of the repeatable hash.
//!
//! `content_digest = sha256(domain_separator || type_name || 0x00 || canonical_bytes)`

use std::fmt;

use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::codec::SpanCodec;
use crate::errors::{UninitializedValueError, ValidationError};
use crate::hash::feed_canonical;

/// Domain separator for value digests: `b"restricted:value:v1\0"`.
const VALUE_DOMAIN_SEPARATOR: &[u8] = b"restricted:value:v1\0";

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256.
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + bytes digest, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub alg: DigestAlg,
    /// Base64URL (no padding) digest bytes.
    #[serde(rename = "b64")]
    pub b64: String,
}

impl Digest {
    /// Constructs a digest after checking the encoding.
    pub fn new(alg: DigestAlg, b64: impl Into<String>) -> Result<Self, ValidationError> {
        let b64 = b64.into();
        let well_formed = b64.len() == 43
            && b64
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !well_formed {
            return Err(ValidationError::new("Digest", &b64));
        }
        Ok(Digest { alg, b64 })
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha-256:{}", self.b64)
    }
}

struct Sha256Sink(Sha256);

impl fmt::Write for Sha256Sink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.update(s.as_bytes());
        Ok(())
    }
}

/// Computes the content digest of a value.
///
/// # Errors
///
/// Returns [`UninitializedValueError`] for the sentinel.
pub fn content_digest<T: SpanCodec>(value: &T) -> Result<Digest, UninitializedValueError> {
    let mut sink = Sha256Sink(Sha256::new());
    sink.0.update(VALUE_DOMAIN_SEPARATOR);
    sink.0.update(T::NAME.as_bytes());
    sink.0.update([0u8]);
    feed_canonical(value, &mut sink)?;
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(sink.0.finalize());
    Ok(Digest {
        alg: DigestAlg::Sha256,
        b64,
    })
}

/// Verifies that `claimed` matches the value's content digest.
pub fn verify_content_digest<T: SpanCodec>(
    value: &T,
    claimed: &Digest,
) -> Result<bool, UninitializedValueError> {
    Ok(&content_digest(value)? == claimed)
}
