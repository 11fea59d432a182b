//! Orchestration between request bodies and the envelope core.

use std::error::Error as StdError;
use std::sync::Arc;

use hybridseal_crypto::{EnvelopeCipher, HybridCipher, KeyProvider};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::ServiceConfig;
use crate::error::{ErrorCode, ServiceError, ServiceResult};
use crate::response::{DecryptData, EncryptData, ServiceResponse};
use crate::validation::{validate_decrypt, validate_encrypt};

/// Encrypt/decrypt entry points for the transport layer.
#[derive(Clone)]
pub struct CryptoService {
    cipher: Arc<dyn EnvelopeCipher>,
    max_payload_length: usize,
}

impl CryptoService {
    pub fn new(cipher: Arc<dyn EnvelopeCipher>, max_payload_length: usize) -> Self {
        Self {
            cipher,
            max_payload_length,
        }
    }

    /// Builds the key provider from `config`. Any failure here should abort startup.
    pub fn from_config(config: &ServiceConfig) -> ServiceResult<Self> {
        let keys = KeyProvider::initialize_with_hash(
            &config.rsa_private_key,
            &config.rsa_public_key,
            config.oaep_hash,
        )
        .inspect_err(|e| error!("refusing to start: {e}"))?;

        Ok(Self::new(
            Arc::new(HybridCipher::new(Arc::new(keys))),
            config.max_payload_length,
        ))
    }

    pub fn max_payload_length(&self) -> usize {
        self.max_payload_length
    }

    pub fn encrypt(&self, payload: &str) -> ServiceResult<EncryptData> {
        let envelope = self.cipher.encrypt(payload)?;
        Ok(envelope.into())
    }

    pub fn decrypt(&self, data1: &str, data2: &str) -> ServiceResult<DecryptData> {
        let payload = self.cipher.decrypt(data1, data2)?;
        Ok(DecryptData { payload })
    }

    /// Validates an encrypt body and runs it through the core.
    pub fn handle_encrypt(&self, body: &Value) -> ServiceResponse<EncryptData> {
        let result = validate_encrypt(body, self.max_payload_length)
            .and_then(|req| self.encrypt(&req.payload));
        respond("encrypt", result)
    }

    /// Validates a decrypt body and runs it through the core.
    pub fn handle_decrypt(&self, body: &Value) -> ServiceResponse<DecryptData> {
        let result = validate_decrypt(body).and_then(|req| self.decrypt(&req.data1, &req.data2));
        respond("decrypt", result)
    }
}

fn respond<T>(operation: &str, result: ServiceResult<T>) -> ServiceResponse<T> {
    match result {
        Ok(data) => ServiceResponse::ok(data),
        Err(err) => {
            log_failure(operation, &err);
            ServiceResponse::from_error(&err)
        }
    }
}

/// Logs the full cause chain for operators. The chain never reaches the response.
fn log_failure(operation: &str, err: &ServiceError) {
    let code = err.code();
    match code {
        ErrorCode::Validation => debug!("{operation} rejected: {err}"),
        _ => {
            let chain = cause_chain(err);
            if code.status() >= 500 || matches!(err, ServiceError::Crypto(e) if e.cause().is_some())
            {
                error!("{operation} failed [{}]: {chain}", code.as_str());
            } else {
                warn!("{operation} failed [{}]: {chain}", code.as_str());
            }
        }
    }
}

fn cause_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
