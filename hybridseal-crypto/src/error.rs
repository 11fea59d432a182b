//! Envelope encryption error types.
//!
//! Caller-visible text lives in the `Display` of [`CryptoError`]. The
//! low-level reason for an encryption or decryption failure is kept as a
//! [`FailureCause`] behind `source()`, reachable by operator logging but
//! never formatted into the error message itself.

use thiserror::Error;

/// Result type for envelope operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors raised by the key provider, encryptor and decryptor.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The plaintext handed to the encryptor is unusable.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// `data1` or `data2` handed to the decryptor is missing or empty.
    #[error("invalid encrypted data: {0}")]
    InvalidEncryptedData(String),

    /// Anything in the encryption path failed.
    #[error("encryption failed")]
    Encryption(#[source] FailureCause),

    /// Anything in the decryption path failed. Deliberately undifferentiated.
    #[error("decryption failed")]
    Decryption(#[source] FailureCause),

    /// The keypair is missing or unusable. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CryptoError {
    /// Returns the operator-only cause of an encryption/decryption failure.
    pub fn cause(&self) -> Option<&FailureCause> {
        match self {
            Self::Encryption(cause) | Self::Decryption(cause) => Some(cause),
            _ => None,
        }
    }
}

/// Low-level reason behind [`CryptoError::Encryption`] or
/// [`CryptoError::Decryption`].
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error("secure random source failed: {0}")]
    Random(#[from] rand::Error),

    #[error("cipher rejected key or IV length")]
    CipherInit,

    #[error("RSA-OAEP wrap failed: {0}")]
    Wrap(#[source] rsa::Error),

    #[error("RSA-OAEP unwrap failed")]
    Unwrap,

    #[error("unwrapped key is {actual} bytes, expected {expected}")]
    KeyLength { expected: usize, actual: usize },

    #[error("base64 transport decoding failed: {0}")]
    Transport(#[from] base64::DecodeError),

    #[error("ciphertext is {actual} bytes, need at least {minimum}")]
    Truncated { minimum: usize, actual: usize },

    #[error("block padding check failed")]
    Padding,

    #[error("plaintext is not valid UTF-8")]
    Utf8,
}
