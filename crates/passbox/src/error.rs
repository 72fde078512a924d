//! Error taxonomy for envelope sealing and opening.

use thiserror::Error;

/// Errors produced by [`encrypt`](crate::encrypt) and
/// [`decrypt`](crate::decrypt).
///
/// A failed decryption reports a single opaque variant for both a wrong
/// password and tampered ciphertext: the AEAD tag check cannot tell the two
/// apart, and the error message must not pretend otherwise.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The envelope text is not valid base64, or decodes to fewer bytes
    /// than the salt + nonce header. Detected before any cryptographic work.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// AEAD authentication failed — wrong password or corrupted data.
    #[error("decryption failed: wrong password or corrupted data")]
    DecryptionFailed,

    /// The authenticated payload is not valid UTF-8.
    ///
    /// Unreachable for envelopes produced by [`encrypt`](crate::encrypt),
    /// which only ever seals UTF-8 input; a foreign producer sealing raw
    /// bytes under the same format can get here.
    #[error("decrypted payload is not valid UTF-8")]
    InvalidPlaintext,

    /// The platform random source or cipher primitive failed. Terminal;
    /// never retried.
    #[error("encryption failure: {0}")]
    EncryptionFailure(String),
}
