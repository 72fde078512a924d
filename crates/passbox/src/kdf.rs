//! PBKDF2-HMAC-SHA256 key derivation.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::envelope::SALT_LEN;

/// Byte length of the derived AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
///
/// Part of the wire contract: both sides must derive with the same count,
/// so raising it is a format change, not a tuning knob.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// A derived 256-bit key.
///
/// Lives only for the duration of one encrypt or decrypt call. The bytes
/// are zeroed when the value is dropped, and `Debug` never prints them.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_LEN]);

impl DerivedKey {
    /// Wrap raw key bytes. Intended for
    /// [`CryptoProvider`](crate::provider::CryptoProvider) implementations.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive a key from `password` and `salt`.
///
/// Pure: the same (password, salt) pair always yields the same key, which
/// is exactly how decryption recovers it. An empty password is accepted and
/// derives a weak key; strength policy belongs to the caller.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut key);
    DerivedKey(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_same_key() {
        let salt = [7u8; SALT_LEN];
        let k1 = derive_key(b"correct-password", &salt);
        let k2 = derive_key(b"correct-password", &salt);
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_salt_different_key() {
        let k1 = derive_key(b"password", &[0u8; SALT_LEN]);
        let k2 = derive_key(b"password", &[1u8; SALT_LEN]);
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_password_different_key() {
        let salt = [0u8; SALT_LEN];
        let k1 = derive_key(b"password1", &salt);
        let k2 = derive_key(b"password2", &salt);
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn empty_password_still_derives() {
        let key = derive_key(b"", &[0u8; SALT_LEN]);
        assert_eq!(key.as_bytes().len(), KEY_LEN);
    }

    #[test]
    fn debug_output_redacted() {
        let key = derive_key(b"secret", &[0u8; SALT_LEN]);
        assert_eq!(format!("{key:?}"), "DerivedKey([REDACTED])");
    }
}
