//! Status-code and body mapping coverage for the HTTP error adapter.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;

use super::INTERNAL_ERROR_BODY;
use crate::domain::Error;

#[rstest]
#[case(Error::missing_field("uid is required"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::invalid_type("uid must be an integer"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::storage("connection refused"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::internal("unexpected state"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::arity_mismatch("Array lengths must match."), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("no token for dietitian"), StatusCode::NOT_FOUND)]
fn codes_map_to_legacy_status(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(error.status_code(), expected);
}

#[actix_web::test]
async fn internal_errors_are_redacted_to_the_fixed_body() {
    let response = Error::storage("password in connection string").error_response();
    let body = to_bytes(response.into_body()).await.expect("body bytes");
    assert_eq!(body.as_ref(), INTERNAL_ERROR_BODY.as_bytes());
}

#[actix_web::test]
async fn reconciler_errors_surface_their_exact_literal() {
    let response = Error::arity_mismatch("Arrays should have the same length").error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body()).await.expect("body bytes");
    assert_eq!(body.as_ref(), b"Arrays should have the same length");
}

#[actix_web::test]
async fn not_found_surfaces_its_message() {
    let response = Error::not_found("no token for dietitian").error_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = to_bytes(response.into_body()).await.expect("body bytes");
    assert_eq!(body.as_ref(), b"no token for dietitian");
}
