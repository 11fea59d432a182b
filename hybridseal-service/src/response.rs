//! Response bodies handed to the transport layer.

use hybridseal_crypto::Envelope;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Uniform response body: `{"successful": .., "error_code": .., "data": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub successful: bool,
    /// Empty on success.
    pub error_code: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            successful: true,
            error_code: String::new(),
            data: Some(data),
        }
    }

    /// Failure body. Carries only the wire code, never the error text.
    pub fn failure(err: &ServiceError) -> Self {
        Self {
            successful: false,
            error_code: err.code().as_str().to_string(),
            data: None,
        }
    }
}

/// Success data for encryption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptData {
    pub data1: String,
    pub data2: String,
}

impl From<Envelope> for EncryptData {
    fn from(envelope: Envelope) -> Self {
        Self {
            data1: envelope.data1,
            data2: envelope.data2,
        }
    }
}

/// Success data for decryption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptData {
    pub payload: String,
}

/// Status code plus body, ready for any HTTP framework to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceResponse<T> {
    pub status: u16,
    pub body: ApiResponse<T>,
}

impl<T> ServiceResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: 200,
            body: ApiResponse::success(data),
        }
    }

    pub fn from_error(err: &ServiceError) -> Self {
        Self {
            status: err.status(),
            body: ApiResponse::failure(err),
        }
    }
}
