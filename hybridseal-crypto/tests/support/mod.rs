//! Shared fixtures for integration tests.
//!
//! Keys are fixed PEM files so no test pays for RSA key generation.

#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use hybridseal_crypto::{EnvelopeDecryptor, EnvelopeEncryptor, KeyProvider, OaepHash};

/// 2048-bit PKCS#8 private key.
pub const PRIMARY_PRIVATE: &str = include_str!("../fixtures/primary_private.pem");
/// SPKI public half of [`PRIMARY_PRIVATE`].
pub const PRIMARY_PUBLIC: &str = include_str!("../fixtures/primary_public.pem");

/// Unrelated 2048-bit PKCS#1 private key.
pub const OTHER_PRIVATE: &str = include_str!("../fixtures/other_private_pkcs1.pem");
/// PKCS#1 public half of [`OTHER_PRIVATE`].
pub const OTHER_PUBLIC: &str = include_str!("../fixtures/other_public_pkcs1.pem");

/// 1024-bit pair, below the accepted minimum.
pub const WEAK_PRIVATE: &str = include_str!("../fixtures/weak_private.pem");
pub const WEAK_PUBLIC: &str = include_str!("../fixtures/weak_public.pem");

/// Envelope produced by the OpenSSL command line for "Hello World!".
pub const OPENSSL_VECTOR: &str = include_str!("../fixtures/openssl_vector.json");

/// Process-wide provider for the primary pair, parsed once.
pub fn primary_keys() -> Arc<KeyProvider> {
    static KEYS: OnceLock<Arc<KeyProvider>> = OnceLock::new();
    Arc::clone(KEYS.get_or_init(|| {
        Arc::new(KeyProvider::initialize(PRIMARY_PRIVATE, PRIMARY_PUBLIC).expect("primary keypair must load"))
    }))
}

pub fn primary_keys_with(hash: OaepHash) -> Arc<KeyProvider> {
    Arc::new(
        KeyProvider::initialize_with_hash(PRIMARY_PRIVATE, PRIMARY_PUBLIC, hash)
            .expect("primary keypair must load"),
    )
}

pub fn other_keys() -> Arc<KeyProvider> {
    Arc::new(KeyProvider::initialize(OTHER_PRIVATE, OTHER_PUBLIC).expect("other keypair must load"))
}

/// Encryptor/decryptor pair sharing the primary keys.
pub fn primary_pair() -> (EnvelopeEncryptor, EnvelopeDecryptor) {
    let keys = primary_keys();
    (EnvelopeEncryptor::new(Arc::clone(&keys)), EnvelopeDecryptor::new(keys))
}
