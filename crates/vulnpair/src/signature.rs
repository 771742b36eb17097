// SPDX-License-Identifier: Apache-2.0

//! Signature-verification pair.
//!
//! Safe half: HMAC-SHA-256 under key material sourced from the environment,
//! compared constant-time against the hex-decoded signature; malformed input
//! fails closed. Unsafe half: HMAC-SHA-1 under a hardcoded key, compared
//! with ordinary early-exit string equality (timing side-channel plus a
//! guessable key).

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Environment variable consulted for the signing key.
pub const SIG_KEY_ENV: &str = "SIG_KEY";

/// Key used when `SIG_KEY` is unset.
const FALLBACK_KEY: &str = "fallback";

/// Key baked into the unsafe half.
const HARDCODED_KEY: &str = "hardcoded-key";

type HmacSha256 = Hmac<Sha256>;
type HmacSha1 = Hmac<Sha1>;

/// Signing key for the safe verification path.
///
/// Passed explicitly so each call site states where its key came from;
/// [`KeyMaterial::from_env`] reads the environment on every call and never
/// caches.
#[derive(Debug, Clone)]
pub struct KeyMaterial {
    secret: Vec<u8>,
}

impl KeyMaterial {
    /// Creates key material from an explicit secret.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Reads the key from `SIG_KEY`, falling back to a constant when unset.
    #[must_use]
    pub fn from_env() -> Self {
        let secret = std::env::var(SIG_KEY_ENV).unwrap_or_else(|_| FALLBACK_KEY.to_string());
        Self::new(secret.into_bytes())
    }

    fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

/// Verifies `sig` (hex-encoded) against the HMAC-SHA-256 digest of
/// `payload` under `key`, in constant time.
///
/// Returns `false` for undecodable or wrong-length signatures; never panics
/// and never propagates a decoding fault.
#[must_use]
pub fn verify_signature_safe(key: &KeyMaterial, payload: &str, sig: &str) -> bool {
    let Ok(provided) = hex::decode(sig) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(key.as_bytes()) else {
        return false;
    };
    mac.update(payload.as_bytes());
    let expected = mac.finalize().into_bytes();

    // Slice ct_eq treats a length mismatch as plain inequality.
    bool::from(expected.as_slice().ct_eq(provided.as_slice()))
}

/// Verifies `sig` against the HMAC-SHA-1 digest of `payload` under a
/// hardcoded key, using ordinary string equality on the hex forms.
#[must_use]
pub fn verify_signature_unsafe(payload: &str, sig: &str) -> bool {
    let Ok(mut mac) = HmacSha1::new_from_slice(HARDCODED_KEY.as_bytes()) else {
        return false;
    };
    mac.update(payload.as_bytes());
    let expected = hex::encode(mac.finalize().into_bytes());
    expected == sig
}
