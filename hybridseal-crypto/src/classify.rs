//! Maps failures onto the closed set of caller-facing error kinds.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Caller-facing error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidPayload,
    InvalidEncryptedData,
    EncryptionFailed,
    DecryptionFailed,
    #[serde(rename = "CONFIGURATION_ERROR")]
    Configuration,
    /// Anything that did not originate in the envelope core.
    #[serde(rename = "INTERNAL_SERVER_ERROR")]
    Internal,
}

impl ErrorKind {
    /// Stable wire code.
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidPayload => "INVALID_PAYLOAD",
            Self::InvalidEncryptedData => "INVALID_ENCRYPTED_DATA",
            Self::EncryptionFailed => "ENCRYPTION_FAILED",
            Self::DecryptionFailed => "DECRYPTION_FAILED",
            Self::Configuration => "CONFIGURATION_ERROR",
            Self::Internal => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Generic message safe to show any caller.
    pub fn default_message(self) -> &'static str {
        match self {
            Self::InvalidPayload => "Invalid payload provided",
            Self::InvalidEncryptedData => "Invalid encrypted data provided",
            Self::EncryptionFailed => "Failed to encrypt data",
            Self::DecryptionFailed => "Failed to decrypt data",
            Self::Configuration => "Service is not configured",
            Self::Internal => "Internal server error",
        }
    }

    /// Whether the caller's input, rather than the service, is at fault.
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::InvalidPayload | Self::InvalidEncryptedData | Self::DecryptionFailed
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of [`classify`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub kind: ErrorKind,
    /// Never contains key material, plaintext or library internals.
    pub message: String,
}

impl CryptoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPayload(_) => ErrorKind::InvalidPayload,
            Self::InvalidEncryptedData(_) => ErrorKind::InvalidEncryptedData,
            Self::Encryption(_) => ErrorKind::EncryptionFailed,
            Self::Decryption(_) => ErrorKind::DecryptionFailed,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// Caller-safe view of this error.
    pub fn classify(&self) -> Classification {
        let kind = self.kind();
        let message = match self {
            Self::InvalidPayload(msg) | Self::InvalidEncryptedData(msg) => msg.clone(),
            // The configuration detail is for operators; callers get the generic text.
            Self::Encryption(_) | Self::Decryption(_) | Self::Configuration(_) => {
                kind.default_message().to_string()
            }
        };
        Classification { kind, message }
    }
}

/// Classifies any error.
///
/// Walks the `source()` chain, so a [`CryptoError`] wrapped by another layer
/// still maps to its own kind. Anything else is [`ErrorKind::Internal`].
pub fn classify(err: &(dyn StdError + 'static)) -> Classification {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(crypto) = e.downcast_ref::<CryptoError>() {
            return crypto.classify();
        }
        current = e.source();
    }
    Classification {
        kind: ErrorKind::Internal,
        message: ErrorKind::Internal.default_message().to_string(),
    }
}
