use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use serde_json::Value;

use venturegraph::error::AppError;
use venturegraph::store::StoreError;

// Test for AppError Display implementation
#[test]
fn test_app_error_display() {
    let error1 = AppError::InvalidRequest("name must not be empty".to_string());
    assert_eq!(error1.to_string(), "Invalid request: name must not be empty");

    let error2 = AppError::Conflict("company named \"Widget Inc\" already exists".to_string());
    assert_eq!(
        error2.to_string(),
        "Conflict: company named \"Widget Inc\" already exists"
    );

    let error3 = AppError::NotFound("company 7 not found".to_string());
    assert_eq!(error3.to_string(), "Not found: company 7 not found");

    let error4 = AppError::StoreUnavailable("connection refused".to_string());
    assert_eq!(error4.to_string(), "Store unavailable: connection refused");

    let error5 = AppError::InternalError("unexpected row shape".to_string());
    assert_eq!(
        error5.to_string(),
        "Internal Server Error: unexpected row shape"
    );
}

// Test for AppError IntoResponse implementation
#[tokio::test]
async fn test_app_error_into_response() {
    let error = AppError::InvalidRequest("negative amount".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"], "Invalid request: negative amount");

    let error = AppError::Conflict("duplicate".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"], "Conflict: duplicate");

    let error = AppError::NotFound("investor 3 not found".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["error"], "Not found: investor 3 not found");

    let error = AppError::StoreUnavailable("pool timed out".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let error = AppError::InternalError("boom".to_string());
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// Store failures carry a fixed HTTP meaning
#[test]
fn test_store_error_mapping() {
    let err = AppError::from(StoreError::Validation("too long".to_string()));
    assert!(matches!(err, AppError::InvalidRequest(_)));

    let err = AppError::from(StoreError::DuplicateName {
        entity: "company",
        name: "Widget Inc".to_string(),
    });
    assert!(matches!(err, AppError::Conflict(_)));

    let err = AppError::from(StoreError::AlreadyAssociated {
        founder_id: 1,
        company_id: 2,
    });
    assert!(matches!(err, AppError::Conflict(_)));

    let err = AppError::from(StoreError::ConstraintConflict(
        "still referenced".to_string(),
    ));
    assert!(matches!(err, AppError::Conflict(_)));

    let err = AppError::from(StoreError::NotFound {
        entity: "founder",
        id: 12,
    });
    assert!(matches!(err, AppError::NotFound(_)));
}
