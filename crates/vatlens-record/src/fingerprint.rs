//! Record fingerprints with domain-separated hashing.
//!
//! A fingerprint is computed as `sha256(domain_separator || canonical_text)`
//! over the stable rendering from [`crate::text::to_canonical_text`], then
//! encoded as unpadded URL-safe base64. Two records fingerprint equal
//! exactly when their canonical renderings are byte-identical.

use crate::text::to_canonical_text;
use crate::validation::ValidationError;
use base64::Engine;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

/// Domain separator for record fingerprints: `b"vatlens:record:v1\0"`.
const RECORD_DOMAIN_SEPARATOR: &[u8] = b"vatlens:record:v1\0";

/// Unpadded URL-safe base64 SHA-256 fingerprint of a canonical record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Parses a validated fingerprint from its textual form.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Regex::new(r"^[A-Za-z0-9_-]{43}$")
            .expect("invalid regex")
            .is_match(&s)
        {
            return Err(ValidationError::PatternMismatch {
                field: "Fingerprint",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Textual form of the fingerprint.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Computes the fingerprint of a record value.
///
/// Formula: `sha256(domain_separator || canonical_text(value))`.
pub fn record_fingerprint(value: &Value) -> Fingerprint {
    let text = to_canonical_text(value);
    let mut hasher = Sha256::new();
    hasher.update(RECORD_DOMAIN_SEPARATOR);
    hasher.update(text.as_bytes());
    let hash = hasher.finalize();
    Fingerprint(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash))
}
