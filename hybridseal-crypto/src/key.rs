//! Long-lived RSA keypair used to wrap and unwrap envelope keys.

use std::fmt;

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::info;

use crate::error::{CryptoError, CryptoResult};
use crate::wrap::OaepHash;

/// Smallest accepted RSA modulus, in bits.
pub const MIN_RSA_KEY_BITS: usize = 2048;

/// Holds the process-wide keypair.
///
/// Built once at startup and shared by reference (typically `Arc<KeyProvider>`).
/// Every check happens in [`KeyProvider::initialize`]; afterwards the
/// accessors cannot fail.
pub struct KeyProvider {
    wrapping: RsaPublicKey,
    unwrapping: RsaPrivateKey,
    oaep_hash: OaepHash,
}

impl KeyProvider {
    /// Parses and validates a PEM keypair using the default OAEP hash.
    ///
    /// The private key may be PKCS#8 or PKCS#1, the public key SPKI or PKCS#1.
    /// Fails with [`CryptoError::Configuration`] if either key is missing,
    /// unparsable, weaker than [`MIN_RSA_KEY_BITS`], or if the two keys do not
    /// belong together.
    pub fn initialize(private_key_pem: &str, public_key_pem: &str) -> CryptoResult<Self> {
        Self::initialize_with_hash(private_key_pem, public_key_pem, OaepHash::default())
    }

    /// Same as [`KeyProvider::initialize`] with an explicit OAEP hash.
    pub fn initialize_with_hash(
        private_key_pem: &str,
        public_key_pem: &str,
        oaep_hash: OaepHash,
    ) -> CryptoResult<Self> {
        let unwrapping = parse_private_key(private_key_pem)?;
        let wrapping = parse_public_key(public_key_pem)?;
        Self::from_keys(unwrapping, wrapping, oaep_hash)
    }

    /// Builds a provider from already-parsed keys, applying the same checks.
    pub fn from_keys(
        unwrapping: RsaPrivateKey,
        wrapping: RsaPublicKey,
        oaep_hash: OaepHash,
    ) -> CryptoResult<Self> {
        unwrapping
            .validate()
            .map_err(|_| config_error("RSA private key failed consistency checks"))?;

        let bits = wrapping.size() * 8;
        if bits < MIN_RSA_KEY_BITS {
            return Err(config_error(format!(
                "RSA key is {bits} bits, minimum is {MIN_RSA_KEY_BITS}"
            )));
        }

        if unwrapping.to_public_key() != wrapping {
            return Err(config_error(
                "RSA public key does not belong to the configured private key",
            ));
        }

        info!("key provider ready: {bits}-bit RSA, OAEP {oaep_hash}");
        Ok(Self {
            wrapping,
            unwrapping,
            oaep_hash,
        })
    }

    /// Key used to wrap envelope keys (public half).
    pub fn wrapping_key(&self) -> &RsaPublicKey {
        &self.wrapping
    }

    /// Key used to unwrap envelope keys (private half).
    pub fn unwrapping_key(&self) -> &RsaPrivateKey {
        &self.unwrapping
    }

    pub fn oaep_hash(&self) -> OaepHash {
        self.oaep_hash
    }

    /// RSA modulus size in bits.
    pub fn modulus_bits(&self) -> usize {
        self.wrapping.size() * 8
    }
}

impl fmt::Debug for KeyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyProvider")
            .field("modulus_bits", &self.modulus_bits())
            .field("oaep_hash", &self.oaep_hash)
            .finish_non_exhaustive()
    }
}

fn config_error(message: impl Into<String>) -> CryptoError {
    CryptoError::Configuration(message.into())
}

fn parse_private_key(pem: &str) -> CryptoResult<RsaPrivateKey> {
    let pem = pem.trim();
    if pem.is_empty() {
        return Err(config_error("RSA private key is missing"));
    }
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|_| config_error("RSA private key is malformed (expected PKCS#8 or PKCS#1 PEM)"))
}

fn parse_public_key(pem: &str) -> CryptoResult<RsaPublicKey> {
    let pem = pem.trim();
    if pem.is_empty() {
        return Err(config_error("RSA public key is missing"));
    }
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|_| config_error("RSA public key is malformed (expected SPKI or PKCS#1 PEM)"))
}
