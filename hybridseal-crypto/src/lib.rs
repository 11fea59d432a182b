//! Hybrid envelope encryption core.
//!
//! Encrypts a text payload once and transports it as two opaque base64
//! strings:
//!
//! - `data1`: a fresh AES-256 key wrapped with RSA-OAEP under the public key
//! - `data2`: a fresh 16-byte IV followed by the AES-256-CBC/PKCS#7 ciphertext
//!
//! Only the holder of the matching private key can unwrap `data1` and so
//! recover the payload from `data2`.
//!
//! # Architecture
//!
//! 1. **[`KeyProvider`]**: the RSA keypair, parsed and validated once at
//!    startup. Immutable afterwards and shared by `Arc`.
//! 2. **[`EnvelopeEncryptor`] / [`EnvelopeDecryptor`]**: stateless
//!    transformations over the shared keys. Each call draws its own key and
//!    IV, so calls never share mutable state.
//! 3. **[`classify`]**: maps any failure to an [`ErrorKind`] and a message
//!    that is safe to return to a caller.
//!
//! All decryption failures collapse into one error on purpose; see
//! [`EnvelopeDecryptor`].

mod cipher;
pub mod classify;
pub mod decryptor;
pub mod encryptor;
pub mod envelope;
mod error;
pub mod key;
pub mod wrap;

pub use cipher::{BLOCK_SIZE, IV_SIZE, SYMMETRIC_KEY_SIZE};
pub use classify::{classify, Classification, ErrorKind};
pub use decryptor::EnvelopeDecryptor;
pub use encryptor::EnvelopeEncryptor;
pub use envelope::{Envelope, EnvelopeCipher, HybridCipher};
pub use error::{CryptoError, CryptoResult, FailureCause};
pub use key::{KeyProvider, MIN_RSA_KEY_BITS};
pub use wrap::OaepHash;
