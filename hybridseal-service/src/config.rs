//! Service configuration.

use std::path::Path;

use hybridseal_crypto::OaepHash;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};

pub const ENV_PRIVATE_KEY: &str = "RSA_PRIVATE_KEY";
pub const ENV_PUBLIC_KEY: &str = "RSA_PUBLIC_KEY";
pub const ENV_PRIVATE_KEY_FILE: &str = "RSA_PRIVATE_KEY_FILE";
pub const ENV_PUBLIC_KEY_FILE: &str = "RSA_PUBLIC_KEY_FILE";
pub const ENV_OAEP_HASH: &str = "OAEP_HASH";
pub const ENV_MAX_PAYLOAD_LENGTH: &str = "MAX_PAYLOAD_LENGTH";

/// Default upper bound on encrypt payloads, in UTF-16 code units.
pub const DEFAULT_MAX_PAYLOAD_LENGTH: usize = 2000;

/// Configuration for the crypto service.
#[derive(Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// PEM private key (PKCS#8 or PKCS#1).
    pub rsa_private_key: String,

    /// PEM public key (SPKI or PKCS#1).
    pub rsa_public_key: String,

    /// OAEP digest; must match every peer.
    #[serde(default)]
    pub oaep_hash: OaepHash,

    /// Maximum encrypt payload length.
    #[serde(default = "default_max_payload_length")]
    pub max_payload_length: usize,
}

fn default_max_payload_length() -> usize {
    DEFAULT_MAX_PAYLOAD_LENGTH
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            rsa_private_key: String::new(),
            rsa_public_key: String::new(),
            oaep_hash: OaepHash::default(),
            max_payload_length: DEFAULT_MAX_PAYLOAD_LENGTH,
        }
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("rsa_private_key", &redacted(&self.rsa_private_key))
            .field("rsa_public_key", &redacted(&self.rsa_public_key))
            .field("oaep_hash", &self.oaep_hash)
            .field("max_payload_length", &self.max_payload_length)
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.trim().is_empty() { "<unset>" } else { "<redacted>" }
}

impl ServiceConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> ServiceResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Each key comes from its PEM variable, or failing that from the file
    /// named by the matching `*_FILE` variable.
    pub fn from_lookup<F>(lookup: F) -> ServiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let rsa_private_key = load_key(&lookup, ENV_PRIVATE_KEY, ENV_PRIVATE_KEY_FILE, "private")?;
        let rsa_public_key = load_key(&lookup, ENV_PUBLIC_KEY, ENV_PUBLIC_KEY_FILE, "public")?;

        let oaep_hash = match lookup(ENV_OAEP_HASH) {
            Some(raw) => raw.parse().map_err(ServiceError::Config)?,
            None => OaepHash::default(),
        };

        let max_payload_length = match lookup(ENV_MAX_PAYLOAD_LENGTH) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ServiceError::Config(format!(
                        "{ENV_MAX_PAYLOAD_LENGTH} must be a positive integer, got '{raw}'"
                    )));
                }
            },
            None => DEFAULT_MAX_PAYLOAD_LENGTH,
        };

        Ok(Self {
            rsa_private_key,
            rsa_public_key,
            oaep_hash,
            max_payload_length,
        })
    }
}

fn load_key<F>(lookup: &F, var: &str, file_var: &str, which: &str) -> ServiceResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(pem) = lookup(var) {
        debug!("loaded RSA {which} key from {var}");
        return Ok(normalize_pem(&pem));
    }
    if let Some(path) = lookup(file_var) {
        let pem = std::fs::read_to_string(Path::new(path.trim())).map_err(|e| {
            ServiceError::Config(format!("cannot read RSA {which} key file named by {file_var}: {e}"))
        })?;
        debug!("loaded RSA {which} key from file named by {file_var}");
        return Ok(normalize_pem(&pem));
    }
    Err(ServiceError::Config(format!(
        "RSA {which} key not found: set {var} or {file_var}"
    )))
}

/// Expands literal `\n` sequences, as found in single-line env values.
fn normalize_pem(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('"');
    if trimmed.contains("\\n") {
        trimmed.replace("\\r\\n", "\n").replace("\\n", "\n")
    } else {
        trimmed.to_string()
    }
}
