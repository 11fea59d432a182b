//! Service layer for hybridseal.
//!
//! Sits between a transport (HTTP or otherwise) and `hybridseal-crypto`:
//! - Loads the RSA keypair from the environment or key files
//! - Validates JSON request bodies and aggregates field errors
//! - Maps failures to `{successful, error_code, data}` bodies and status codes
//! - Logs operator diagnostics without leaking them to callers

pub mod config;
pub mod error;
pub mod logging;
pub mod response;
pub mod service;
pub mod validation;

pub use config::ServiceConfig;
pub use error::{ErrorCode, ServiceError, ServiceResult};
pub use response::{ApiResponse, DecryptData, EncryptData, ServiceResponse};
pub use service::CryptoService;
