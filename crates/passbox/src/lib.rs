//! Password-based authenticated encryption with a self-describing text
//! envelope.
//!
//! An AES-256 key is derived from the password with PBKDF2-HMAC-SHA256
//! (100,000 iterations) and a fresh random salt; the plaintext is sealed
//! under a fresh random nonce with AES-256-GCM; everything needed to
//! decrypt — except the password — travels in one base64 string:
//!
//! ```text
//! base64( salt[16] || nonce[12] || ciphertext+tag )
//! ```
//!
//! Both operations are stateless and freely concurrent. Nothing is retained
//! between calls: salt, nonce, and key material are generated per call and
//! discarded on return.
//!
//! # Example
//!
//! ```
//! let envelope = passbox::encrypt("hello world", "correct-password")?;
//! assert_eq!(passbox::decrypt(&envelope, "correct-password")?, "hello world");
//! assert!(passbox::decrypt(&envelope, "wrong-password").is_err());
//! # Ok::<(), passbox::CryptoError>(())
//! ```

pub mod cipher;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod provider;

pub use cipher::{decrypt, decrypt_with, encrypt, encrypt_with};
pub use envelope::{Envelope, MIN_ENVELOPE_LEN, NONCE_LEN, SALT_LEN};
pub use error::CryptoError;
pub use kdf::{DerivedKey, KEY_LEN, PBKDF2_ITERATIONS};
pub use provider::{CryptoProvider, RustCryptoProvider};
