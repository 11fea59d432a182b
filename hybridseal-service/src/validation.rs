//! Request body validation.
//!
//! Runs before the envelope core and collects every violation in a body
//! instead of stopping at the first one.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Map, Value};

use crate::error::{ServiceError, ServiceResult};

/// A validated encrypt request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptRequest {
    pub payload: String,
}

/// A validated decrypt request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptRequest {
    pub data1: String,
    pub data2: String,
}

/// Validates an encrypt body: `{"payload": "<1..=max_len characters>"}`.
///
/// Length is measured in UTF-16 code units, the way JavaScript clients count it.
pub fn validate_encrypt(body: &Value, max_len: usize) -> ServiceResult<EncryptRequest> {
    let fields = as_object(body)?;
    let mut errors = unknown_properties(fields, &["payload"]);

    let payload = required_string(fields, "payload", &mut errors).and_then(|payload| {
        let len = payload.encode_utf16().count();
        if len > max_len {
            errors.push(format!("payload cannot exceed {max_len} characters"));
            return None;
        }
        Some(payload)
    });

    match payload {
        Some(payload) if errors.is_empty() => Ok(EncryptRequest {
            payload: payload.to_string(),
        }),
        _ => Err(ServiceError::Validation(errors)),
    }
}

/// Validates a decrypt body: `{"data1": "<base64>", "data2": "<base64>"}`.
pub fn validate_decrypt(body: &Value) -> ServiceResult<DecryptRequest> {
    let fields = as_object(body)?;
    let mut errors = unknown_properties(fields, &["data1", "data2"]);

    let data1 = required_base64(fields, "data1", &mut errors);
    let data2 = required_base64(fields, "data2", &mut errors);

    match (data1, data2) {
        (Some(data1), Some(data2)) if errors.is_empty() => Ok(DecryptRequest {
            data1: data1.to_string(),
            data2: data2.to_string(),
        }),
        _ => Err(ServiceError::Validation(errors)),
    }
}

fn as_object(body: &Value) -> ServiceResult<&Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| ServiceError::Validation(vec!["request body must be a JSON object".into()]))
}

fn unknown_properties(fields: &Map<String, Value>, allowed: &[&str]) -> Vec<String> {
    fields
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .map(|key| format!("property {key} should not exist"))
        .collect()
}

fn required_string<'a>(
    fields: &'a Map<String, Value>,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a str> {
    match fields.get(name) {
        None | Some(Value::Null) => {
            errors.push(format!("{name} field is required"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(format!("{name} cannot be empty"));
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            errors.push(format!("{name} must be a string"));
            None
        }
    }
}

fn required_base64<'a>(
    fields: &'a Map<String, Value>,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a str> {
    let value = required_string(fields, name, errors)?;
    if BASE64.decode(value).is_err() {
        errors.push(format!("{name} must be a valid Base64 string"));
        return None;
    }
    Some(value)
}
