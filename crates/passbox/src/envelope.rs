//! Wire framing for the transmissible envelope.
//!
//! # Envelope format
//!
//! ```text
//! base64( salt[16] || nonce[12] || ciphertext+tag[N] )
//! ```
//!
//! The standard padded base64 alphabet is used so the text survives
//! copy/paste transport. No version byte is included: the fixed parameter
//! set (PBKDF2-SHA256 at 100,000 iterations, AES-256-GCM) is the implicit
//! version, and changing any parameter requires a new, explicitly versioned
//! format.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::CryptoError;

/// Byte length of the key-derivation salt.
pub const SALT_LEN: usize = 16;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Smallest decoded envelope that can carry the salt + nonce header.
pub const MIN_ENVELOPE_LEN: usize = SALT_LEN + NONCE_LEN;

/// A decoded envelope: the salt and nonce used by one encryption call plus
/// the ciphertext with its authentication tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Key-derivation salt, fresh per encryption call.
    pub salt: [u8; SALT_LEN],
    /// AEAD nonce, fresh per encryption call.
    pub nonce: [u8; NONCE_LEN],
    /// Raw ciphertext + authentication tag bytes.
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Encode this envelope to its canonical base64 text form.
    pub fn to_base64(&self) -> String {
        let mut raw = Vec::with_capacity(MIN_ENVELOPE_LEN + self.ciphertext.len());
        raw.extend_from_slice(&self.salt);
        raw.extend_from_slice(&self.nonce);
        raw.extend_from_slice(&self.ciphertext);
        STANDARD.encode(raw)
    }

    /// Parse envelope text back into an [`Envelope`].
    ///
    /// The length check is explicit so that undersized input is rejected
    /// here and never reaches the cipher.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedEnvelope`] if `text` is not valid
    /// base64 or decodes to fewer than [`MIN_ENVELOPE_LEN`] bytes.
    pub fn from_base64(text: &str) -> Result<Self, CryptoError> {
        let raw = STANDARD
            .decode(text)
            .map_err(|_| CryptoError::MalformedEnvelope("invalid base64".into()))?;
        if raw.len() < MIN_ENVELOPE_LEN {
            return Err(CryptoError::MalformedEnvelope(format!(
                "decoded length {} is shorter than the {MIN_ENVELOPE_LEN}-byte header",
                raw.len()
            )));
        }

        let (salt_bytes, rest) = raw.split_at(SALT_LEN);
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(salt_bytes);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);

        Ok(Self {
            salt,
            nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }
}
