//! Platform cryptography as an injected capability.
//!
//! The framing and error logic never touch a crypto library directly; every
//! primitive call goes through [`CryptoProvider`], so a hardware-backed or
//! separately audited backend can be swapped in without touching the
//! envelope code.

use aes_gcm::{
    aead::{rand_core::RngCore, Aead, KeyInit, OsRng},
    Aes256Gcm, Key, Nonce,
};

use crate::envelope::{NONCE_LEN, SALT_LEN};
use crate::error::CryptoError;
use crate::kdf::{self, DerivedKey};

/// The set of platform primitives the engine needs: a CSPRNG, a
/// password-based KDF, and an AEAD cipher.
#[cfg_attr(test, mockall::automock)]
pub trait CryptoProvider {
    /// Fill `buf` with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EncryptionFailure`] if the platform random
    /// source fails.
    fn fill_random(&self, buf: &mut [u8]) -> Result<(), CryptoError>;

    /// Derive a 256-bit key from `password` and `salt` with the fixed
    /// PBKDF2 parameters.
    fn derive_key(&self, password: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey;

    /// Encrypt `plaintext` under `key` and `nonce`, returning ciphertext
    /// with the appended authentication tag.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::EncryptionFailure`] on an internal AEAD error
    /// (should be unreachable with a valid key and nonce).
    fn seal(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_LEN],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError>;

    /// Decrypt and verify `ciphertext` (which carries the tag).
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::DecryptionFailed`] if tag verification fails.
    fn open(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_LEN],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError>;
}

/// Production backend: `pbkdf2` + `sha2` for derivation, `aes-gcm` for
/// sealing, and the OS CSPRNG for randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoProvider;

impl CryptoProvider for RustCryptoProvider {
    fn fill_random(&self, buf: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| CryptoError::EncryptionFailure(format!("random source failed: {e}")))
    }

    fn derive_key(&self, password: &[u8], salt: &[u8; SALT_LEN]) -> DerivedKey {
        kdf::derive_key(password, salt)
    }

    fn seal(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_LEN],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
        cipher
            .encrypt(Nonce::from_slice(nonce), plaintext)
            .map_err(|_| CryptoError::EncryptionFailure("aead seal failed".into()))
    }

    fn open(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_LEN],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::KEY_LEN;

    fn fixed_key(byte: u8) -> DerivedKey {
        DerivedKey::from_bytes([byte; KEY_LEN])
    }

    #[test]
    fn seal_open_round_trip() {
        let provider = RustCryptoProvider;
        let key = fixed_key(0x42);
        let nonce = [0x24u8; NONCE_LEN];
        let sealed = provider.seal(&key, &nonce, b"123-45-6789").unwrap();
        let opened = provider.open(&key, &nonce, &sealed).unwrap();
        assert_eq!(opened, b"123-45-6789");
    }

    #[test]
    fn sealed_output_carries_tag_overhead() {
        let provider = RustCryptoProvider;
        let sealed = provider
            .seal(&fixed_key(0x42), &[0u8; NONCE_LEN], b"hello")
            .unwrap();
        // 16-byte GCM tag appended to the ciphertext
        assert_eq!(sealed.len(), 5 + 16);
    }

    #[test]
    fn open_with_wrong_key_fails() {
        let provider = RustCryptoProvider;
        let nonce = [0u8; NONCE_LEN];
        let sealed = provider.seal(&fixed_key(0x01), &nonce, b"secret").unwrap();
        let err = provider.open(&fixed_key(0x02), &nonce, &sealed).unwrap_err();
        assert!(matches!(err, CryptoError::DecryptionFailed));
    }

    #[test]
    fn open_with_tampered_ciphertext_fails() {
        let provider = RustCryptoProvider;
        let key = fixed_key(0x42);
        let nonce = [0u8; NONCE_LEN];
        let mut sealed = provider.seal(&key, &nonce, b"tamper me").unwrap();
        sealed[0] ^= 0xFF;
        assert!(provider.open(&key, &nonce, &sealed).is_err());
    }

    #[test]
    fn fill_random_outputs_differ() {
        let provider = RustCryptoProvider;
        let mut a = [0u8; SALT_LEN];
        let mut b = [0u8; SALT_LEN];
        provider.fill_random(&mut a).unwrap();
        provider.fill_random(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
