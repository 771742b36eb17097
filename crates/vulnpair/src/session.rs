// SPDX-License-Identifier: Apache-2.0

//! Session-identifier pair: CSPRNG-backed vs. trivially guessable.

use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes in a safe session id (256 bits of entropy).
const SESSION_ID_BYTES: usize = 32;

/// Produces an unpredictable session id: 32 bytes from the OS random
/// source, hex-encoded to 64 characters.
#[must_use]
pub fn make_session_id_safe() -> String {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Produces a deterministic, guessable id: the username plus a constant
/// suffix. No entropy whatsoever.
#[must_use]
pub fn make_session_id_unsafe(user: &str) -> String {
    format!("{user}123")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_ids_are_64_hex_chars() {
        let id = make_session_id_safe();
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_safe_ids_differ_between_calls() {
        assert_ne!(make_session_id_safe(), make_session_id_safe());
    }

    #[test]
    fn test_unsafe_id_is_fully_predictable() {
        assert_eq!(make_session_id_unsafe("alice"), "alice123");
        assert_eq!(make_session_id_unsafe("alice"), make_session_id_unsafe("alice"));
    }
}
