//! Envelope back to plaintext.
//!
//! Every failure past the emptiness check is reported as the same
//! [`CryptoError::Decryption`], whether the base64 was bad, the key did not
//! unwrap, the padding was wrong or the result was not UTF-8. Distinguishable
//! errors here would hand a caller a padding oracle.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::cipher::{self, BLOCK_SIZE, IV_SIZE};
use crate::error::{CryptoError, CryptoResult, FailureCause};
use crate::key::KeyProvider;
use crate::wrap;

/// Opens envelopes produced by [`crate::EnvelopeEncryptor`].
#[derive(Clone, Debug)]
pub struct EnvelopeDecryptor {
    keys: Arc<KeyProvider>,
}

impl EnvelopeDecryptor {
    pub fn new(keys: Arc<KeyProvider>) -> Self {
        Self { keys }
    }

    /// Decrypts `(data1, data2)` back into the plaintext.
    ///
    /// Either returns the full plaintext or an error; never a partial
    /// or garbled result.
    pub fn decrypt(&self, data1: &str, data2: &str) -> CryptoResult<String> {
        if data1.trim().is_empty() || data2.trim().is_empty() {
            return Err(CryptoError::InvalidEncryptedData(
                "data1 and data2 must be non-empty strings".to_string(),
            ));
        }
        self.open(data1, data2).map_err(CryptoError::Decryption)
    }

    fn open(&self, data1: &str, data2: &str) -> Result<String, FailureCause> {
        let wrapped = BASE64.decode(data1.trim())?;
        let key = wrap::unwrap_key(self.keys.unwrapping_key(), self.keys.oaep_hash(), &wrapped)?;

        let combined = BASE64.decode(data2.trim())?;
        // One padded block at minimum, even for the shortest payload.
        let minimum = IV_SIZE + BLOCK_SIZE;
        if combined.len() < minimum {
            return Err(FailureCause::Truncated {
                minimum,
                actual: combined.len(),
            });
        }
        let (iv, ciphertext) = combined.split_at(IV_SIZE);

        let plaintext = cipher::decrypt(&key, iv, ciphertext)?;
        std::str::from_utf8(&plaintext)
            .map(str::to_owned)
            .map_err(|_| FailureCause::Utf8)
    }
}
