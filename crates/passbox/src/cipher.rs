//! Password-based authenticated encryption of text.
//!
//! The two public operations, [`encrypt`] and [`decrypt`], are stateless
//! and share nothing between calls — arbitrary concurrent use needs no
//! locking. The `_with` variants accept a caller-supplied
//! [`CryptoProvider`] backend; the plain forms use [`RustCryptoProvider`].

use tracing::debug;

use crate::envelope::{Envelope, NONCE_LEN, SALT_LEN};
use crate::error::CryptoError;
use crate::provider::{CryptoProvider, RustCryptoProvider};

/// Encrypt `plaintext` under `password`, returning envelope text.
///
/// A fresh 16-byte salt and 12-byte nonce are drawn from the OS CSPRNG on
/// every call, so two calls with identical inputs produce different
/// envelopes. The plaintext may be empty. An empty password is accepted and
/// derives a weak key; enforcing a strength policy is the caller's
/// decision.
///
/// # Errors
///
/// Returns [`CryptoError::EncryptionFailure`] if the platform random source
/// or cipher primitive fails.
pub fn encrypt(plaintext: &str, password: &str) -> Result<String, CryptoError> {
    encrypt_with(&RustCryptoProvider, plaintext, password)
}

/// [`encrypt`] over a caller-supplied [`CryptoProvider`].
pub fn encrypt_with<P: CryptoProvider>(
    provider: &P,
    plaintext: &str,
    password: &str,
) -> Result<String, CryptoError> {
    let mut salt = [0u8; SALT_LEN];
    provider.fill_random(&mut salt)?;
    let mut nonce = [0u8; NONCE_LEN];
    provider.fill_random(&mut nonce)?;

    let key = provider.derive_key(password.as_bytes(), &salt);
    let ciphertext = provider.seal(&key, &nonce, plaintext.as_bytes())?;

    let envelope = Envelope {
        salt,
        nonce,
        ciphertext,
    };
    debug!(
        envelope_len = SALT_LEN + NONCE_LEN + envelope.ciphertext.len(),
        "envelope sealed"
    );
    Ok(envelope.to_base64())
}

/// Decrypt envelope text produced by [`encrypt`] with `password`.
///
/// Either the full plaintext is returned or an error is raised; there is no
/// partial result.
///
/// # Errors
///
/// - [`CryptoError::MalformedEnvelope`] — the text is not valid base64 or
///   decodes to fewer than 28 bytes. Checked before any cryptographic work.
/// - [`CryptoError::DecryptionFailed`] — tag verification failed: wrong
///   password or tampered data, deliberately indistinguishable.
/// - [`CryptoError::InvalidPlaintext`] — the authenticated payload is not
///   valid UTF-8.
pub fn decrypt(envelope_text: &str, password: &str) -> Result<String, CryptoError> {
    decrypt_with(&RustCryptoProvider, envelope_text, password)
}

/// [`decrypt`] over a caller-supplied [`CryptoProvider`].
pub fn decrypt_with<P: CryptoProvider>(
    provider: &P,
    envelope_text: &str,
    password: &str,
) -> Result<String, CryptoError> {
    let envelope = Envelope::from_base64(envelope_text)?;

    let key = provider.derive_key(password.as_bytes(), &envelope.salt);
    let plaintext = provider
        .open(&key, &envelope.nonce, &envelope.ciphertext)
        .map_err(|e| {
            debug!("envelope failed authentication");
            e
        })?;

    String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidPlaintext)
}
