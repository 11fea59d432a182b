//! The wire envelope and the cipher seam consumed by the service layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::decryptor::EnvelopeDecryptor;
use crate::encryptor::EnvelopeEncryptor;
use crate::error::CryptoResult;
use crate::key::KeyProvider;

/// Two opaque transport fields produced by one encryption.
///
/// - `data1`: base64 of the RSA-OAEP wrapped AES key.
/// - `data2`: base64 of `IV (16 bytes) || AES-256-CBC ciphertext`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub data1: String,
    pub data2: String,
}

/// Trait for sealing text into an [`Envelope`] and opening it again.
///
/// Consumers depend on `Arc<dyn EnvelopeCipher>` and never see keys.
pub trait EnvelopeCipher: Send + Sync {
    /// Encrypts `payload` under a fresh symmetric key.
    fn encrypt(&self, payload: &str) -> CryptoResult<Envelope>;

    /// Reverses [`EnvelopeCipher::encrypt`].
    fn decrypt(&self, data1: &str, data2: &str) -> CryptoResult<String>;
}

/// RSA-OAEP + AES-256-CBC implementation of [`EnvelopeCipher`].
#[derive(Clone, Debug)]
pub struct HybridCipher {
    encryptor: EnvelopeEncryptor,
    decryptor: EnvelopeDecryptor,
}

impl HybridCipher {
    pub fn new(keys: Arc<KeyProvider>) -> Self {
        Self {
            encryptor: EnvelopeEncryptor::new(Arc::clone(&keys)),
            decryptor: EnvelopeDecryptor::new(keys),
        }
    }
}

impl EnvelopeCipher for HybridCipher {
    fn encrypt(&self, payload: &str) -> CryptoResult<Envelope> {
        self.encryptor.encrypt(payload)
    }

    fn decrypt(&self, data1: &str, data2: &str) -> CryptoResult<String> {
        self.decryptor.decrypt(data1, data2)
    }
}
