use hybridseal_service::ServiceError;
use hybridseal_service::validation::{
    DecryptRequest, EncryptRequest, validate_decrypt, validate_encrypt,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const MAX: usize = 2000;

fn violations<T: std::fmt::Debug>(result: Result<T, ServiceError>) -> Vec<String> {
    match result {
        Err(ServiceError::Validation(errors)) => errors,
        other => panic!("expected ServiceError::Validation, got: {other:?}"),
    }
}

// ── encrypt ─────────────────────────────────────────────────────

#[test]
fn encrypt_accepts_plain_payload() {
    let req = validate_encrypt(&json!({"payload": "Hello World!"}), MAX).unwrap();
    assert_eq!(
        req,
        EncryptRequest {
            payload: "Hello World!".into()
        }
    );
}

#[test]
fn encrypt_accepts_whitespace_payload() {
    let req = validate_encrypt(&json!({"payload": "   "}), MAX).unwrap();
    assert_eq!(req.payload, "   ");
}

#[test]
fn encrypt_missing_payload() {
    assert_eq!(
        violations(validate_encrypt(&json!({}), MAX)),
        vec!["payload field is required"]
    );
}

#[test]
fn encrypt_null_payload() {
    assert_eq!(
        violations(validate_encrypt(&json!({"payload": null}), MAX)),
        vec!["payload field is required"]
    );
}

#[test]
fn encrypt_empty_payload() {
    assert_eq!(
        violations(validate_encrypt(&json!({"payload": ""}), MAX)),
        vec!["payload cannot be empty"]
    );
}

#[test]
fn encrypt_non_string_payload() {
    for body in [json!({"payload": 42}), json!({"payload": true}), json!({"payload": ["a"]})] {
        assert_eq!(
            violations(validate_encrypt(&body, MAX)),
            vec!["payload must be a string"]
        );
    }
}

#[test]
fn encrypt_length_boundary() {
    let at_limit = "a".repeat(MAX);
    assert!(validate_encrypt(&json!({"payload": at_limit}), MAX).is_ok());

    let over = "a".repeat(MAX + 1);
    assert_eq!(
        violations(validate_encrypt(&json!({"payload": over}), MAX)),
        vec!["payload cannot exceed 2000 characters"]
    );
}

#[test]
fn encrypt_length_counts_utf16_units() {
    // Each emoji is two UTF-16 code units.
    let at_limit = "😀".repeat(MAX / 2);
    assert!(validate_encrypt(&json!({"payload": at_limit}), MAX).is_ok());

    let over = format!("{}a", "😀".repeat(MAX / 2));
    assert!(validate_encrypt(&json!({"payload": over}), MAX).is_err());

    // Multi-byte but single-unit characters count once.
    let accented = "é".repeat(MAX);
    assert!(validate_encrypt(&json!({"payload": accented}), MAX).is_ok());
}

#[test]
fn encrypt_custom_limit() {
    assert!(validate_encrypt(&json!({"payload": "abcd"}), 4).is_ok());
    assert_eq!(
        violations(validate_encrypt(&json!({"payload": "abcde"}), 4)),
        vec!["payload cannot exceed 4 characters"]
    );
}

#[test]
fn encrypt_rejects_unknown_properties() {
    let errors = violations(validate_encrypt(
        &json!({"payload": "hi", "extra": 1}),
        MAX,
    ));
    assert_eq!(errors, vec!["property extra should not exist"]);
}

#[test]
fn encrypt_aggregates_violations() {
    let errors = violations(validate_encrypt(&json!({"extra": 1}), MAX));
    assert_eq!(
        errors,
        vec!["property extra should not exist", "payload field is required"]
    );
}

#[test]
fn encrypt_rejects_non_object_body() {
    for body in [json!(null), json!("payload"), json!([1, 2]), json!(7)] {
        assert_eq!(
            violations(validate_encrypt(&body, MAX)),
            vec!["request body must be a JSON object"]
        );
    }
}

// ── decrypt ─────────────────────────────────────────────────────

#[test]
fn decrypt_accepts_base64_fields() {
    let req = validate_decrypt(&json!({"data1": "AAAA", "data2": "QUJDRA=="})).unwrap();
    assert_eq!(
        req,
        DecryptRequest {
            data1: "AAAA".into(),
            data2: "QUJDRA==".into()
        }
    );
}

#[test]
fn decrypt_missing_fields() {
    assert_eq!(
        violations(validate_decrypt(&json!({}))),
        vec!["data1 field is required", "data2 field is required"]
    );
}

#[test]
fn decrypt_null_and_empty_fields() {
    assert_eq!(
        violations(validate_decrypt(&json!({"data1": null, "data2": ""}))),
        vec!["data1 field is required", "data2 cannot be empty"]
    );
}

#[test]
fn decrypt_non_string_fields() {
    assert_eq!(
        violations(validate_decrypt(&json!({"data1": 1, "data2": {"a": 1}}))),
        vec!["data1 must be a string", "data2 must be a string"]
    );
}

#[test]
fn decrypt_rejects_invalid_base64() {
    assert_eq!(
        violations(validate_decrypt(
            &json!({"data1": "not base64!", "data2": "AAAA"})
        )),
        vec!["data1 must be a valid Base64 string"]
    );
    assert_eq!(
        violations(validate_decrypt(&json!({"data1": "AAAA", "data2": "AAA"}))),
        vec!["data2 must be a valid Base64 string"]
    );
}

#[test]
fn decrypt_rejects_unknown_properties() {
    assert_eq!(
        violations(validate_decrypt(
            &json!({"data1": "AAAA", "data2": "AAAA", "payload": "x"})
        )),
        vec!["property payload should not exist"]
    );
}

#[test]
fn validation_error_display_joins_messages() {
    let err = validate_decrypt(&json!({})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation failed: data1 field is required, data2 field is required"
    );
}
