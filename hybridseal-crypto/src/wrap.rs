//! RSA-OAEP wrapping of the per-envelope symmetric key.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::cipher::{SymmetricKey, SYMMETRIC_KEY_SIZE};
use crate::error::FailureCause;

/// Digest used for the OAEP label hash and MGF1.
///
/// `Sha1` matches the default of OpenSSL and Node's
/// `RSA_PKCS1_OAEP_PADDING`, which existing peers produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OaepHash {
    #[default]
    Sha1,
    Sha256,
}

impl OaepHash {
    fn padding(self) -> Oaep {
        match self {
            Self::Sha1 => Oaep::new::<sha1::Sha1>(),
            Self::Sha256 => Oaep::new::<sha2::Sha256>(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for OaepHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OaepHash {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            other => Err(format!("unsupported OAEP hash '{other}' (expected sha1 or sha256)")),
        }
    }
}

/// Wraps `key` under the public key.
pub(crate) fn wrap_key(
    public: &RsaPublicKey,
    hash: OaepHash,
    key: &SymmetricKey,
) -> Result<Vec<u8>, FailureCause> {
    public
        .encrypt(&mut OsRng, hash.padding(), key.as_bytes())
        .map_err(FailureCause::Wrap)
}

/// Recovers a symmetric key from its wrapped form.
///
/// Uses blinding so the private-key operation does not leak timing.
pub(crate) fn unwrap_key(
    private: &RsaPrivateKey,
    hash: OaepHash,
    wrapped: &[u8],
) -> Result<SymmetricKey, FailureCause> {
    let raw = private
        .decrypt_blinded(&mut OsRng, hash.padding(), wrapped)
        .map(Zeroizing::new)
        .map_err(|_| FailureCause::Unwrap)?;

    SymmetricKey::from_slice(&raw).ok_or(FailureCause::KeyLength {
        expected: SYMMETRIC_KEY_SIZE,
        actual: raw.len(),
    })
}
