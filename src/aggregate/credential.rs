//! Account credential
//!
//! The secret never leaves this type: it is not printed, serialized or
//! returned, only compared.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

/// Opaque login secret.
///
/// Comparison digests both sides to a fixed length first, so neither the
/// content nor the length of the stored secret affects timing.
#[derive(Debug)]
pub struct Credential(SecretString);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(SecretString::from(secret.into()))
    }

    /// Constant-time check of `candidate` against the stored secret
    pub fn matches(&self, candidate: &str) -> bool {
        let stored = Sha256::digest(self.0.expose_secret().as_bytes());
        let supplied = Sha256::digest(candidate.as_bytes());
        constant_time_eq(&stored, &supplied)
    }
}

impl From<&str> for Credential {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl From<String> for Credential {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}
