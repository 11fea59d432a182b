//! Plaintext to envelope.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::cipher::{self, IV_SIZE, SymmetricKey};
use crate::envelope::Envelope;
use crate::error::{CryptoError, CryptoResult, FailureCause};
use crate::key::KeyProvider;
use crate::wrap;

/// Seals text payloads for the holder of the provider's private key.
///
/// Stateless apart from the shared keys; safe to call from many threads.
#[derive(Clone, Debug)]
pub struct EnvelopeEncryptor {
    keys: Arc<KeyProvider>,
}

impl EnvelopeEncryptor {
    pub fn new(keys: Arc<KeyProvider>) -> Self {
        Self { keys }
    }

    /// Encrypts `payload` into a fresh [`Envelope`].
    ///
    /// 1. Draws a fresh 256-bit key and 128-bit IV from the OS RNG
    /// 2. Encrypts the UTF-8 bytes with AES-256-CBC/PKCS#7
    /// 3. `data2 = base64(IV || ciphertext)`
    /// 4. `data1 = base64(RSA-OAEP(public key, AES key))`
    ///
    /// An empty payload is [`CryptoError::InvalidPayload`]. Every other
    /// failure collapses into [`CryptoError::Encryption`].
    pub fn encrypt(&self, payload: &str) -> CryptoResult<Envelope> {
        if payload.is_empty() {
            return Err(CryptoError::InvalidPayload(
                "payload must be a non-empty string".to_string(),
            ));
        }
        self.seal(payload.as_bytes()).map_err(CryptoError::Encryption)
    }

    fn seal(&self, plaintext: &[u8]) -> Result<Envelope, FailureCause> {
        let key = SymmetricKey::generate()?;
        let iv = cipher::generate_iv()?;

        let ciphertext = cipher::encrypt(&key, &iv, plaintext)?;
        let mut combined = Vec::with_capacity(IV_SIZE + ciphertext.len());
        combined.extend_from_slice(&iv);
        combined.extend_from_slice(&ciphertext);

        let wrapped = wrap::wrap_key(self.keys.wrapping_key(), self.keys.oaep_hash(), &key)?;

        Ok(Envelope {
            data1: BASE64.encode(wrapped),
            data2: BASE64.encode(combined),
        })
    }
}
