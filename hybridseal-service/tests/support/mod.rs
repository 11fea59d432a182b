//! Shared helpers for service integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use hybridseal_crypto::{CryptoError, CryptoResult, Envelope, EnvelopeCipher, FailureCause};
use hybridseal_service::{CryptoService, ServiceConfig};

pub const PRIMARY_PRIVATE: &str =
    include_str!("../../../hybridseal-crypto/tests/fixtures/primary_private.pem");
pub const PRIMARY_PUBLIC: &str =
    include_str!("../../../hybridseal-crypto/tests/fixtures/primary_public.pem");
pub const OTHER_PUBLIC: &str =
    include_str!("../../../hybridseal-crypto/tests/fixtures/other_public_pkcs1.pem");

pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        rsa_private_key: PRIMARY_PRIVATE.to_string(),
        rsa_public_key: PRIMARY_PUBLIC.to_string(),
        ..ServiceConfig::default()
    }
}

/// Service over the primary fixture keys, built once per test binary.
pub fn test_service() -> CryptoService {
    static SERVICE: OnceLock<CryptoService> = OnceLock::new();
    SERVICE
        .get_or_init(|| CryptoService::from_config(&test_config()).expect("fixture config must load"))
        .clone()
}

/// Lookup closure over a fixed set of variables.
pub fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

/// Cipher whose encryption path always fails, as if the RNG were unavailable.
pub struct BrokenCipher;

impl EnvelopeCipher for BrokenCipher {
    fn encrypt(&self, _payload: &str) -> CryptoResult<Envelope> {
        Err(CryptoError::Encryption(FailureCause::CipherInit))
    }

    fn decrypt(&self, _data1: &str, _data2: &str) -> CryptoResult<String> {
        Err(CryptoError::Decryption(FailureCause::Padding))
    }
}

pub fn broken_service() -> CryptoService {
    CryptoService::new(Arc::new(BrokenCipher), 2000)
}
