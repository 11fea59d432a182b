//! Service error types.

use hybridseal_crypto::{CryptoError, ErrorKind};
use thiserror::Error;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// One or more request fields failed validation.
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// Wire error codes, the crypto [`ErrorKind`]s plus request validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Validation,
    Kind(ErrorKind),
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Kind(kind) => kind.code(),
        }
    }

    /// HTTP status for this code.
    pub fn status(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Kind(kind) if kind.is_client_error() => 400,
            Self::Kind(_) => 500,
        }
    }
}

impl ServiceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::Validation,
            Self::Config(_) => ErrorCode::Kind(ErrorKind::Configuration),
            Self::Crypto(err) => ErrorCode::Kind(err.kind()),
        }
    }

    pub fn status(&self) -> u16 {
        self.code().status()
    }
}
