//! Regression coverage for domain error construction and validation.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::missing_field("missing uid"), ErrorCode::MissingField)]
#[case(Error::invalid_type("item count must be numeric"), ErrorCode::InvalidType)]
#[case(Error::arity_mismatch("Array lengths must match."), ErrorCode::ArityMismatch)]
#[case(Error::not_found("no such dietitian"), ErrorCode::NotFound)]
#[case(Error::storage("insert failed"), ErrorCode::StorageFailure)]
#[case(Error::internal("boom"), ErrorCode::Internal)]
fn convenience_constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::Internal, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn display_uses_the_message() {
    let error = Error::missing_field("missing uid");
    assert_eq!(error.to_string(), "missing uid");
}

#[rstest]
fn details_round_trip() {
    let error = Error::invalid_type("uid must be an integer")
        .with_details(json!({ "field": "uid", "value": "invalid" }));

    let details = error.details().and_then(Value::as_object).expect("details");
    assert_eq!(details.get("field").and_then(Value::as_str), Some("uid"));
}
