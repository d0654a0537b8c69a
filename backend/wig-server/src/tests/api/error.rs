use crate::api::error::ApiError;

use wig_core::AuthProvider;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn unauthorized_produces_fixed_shape_401_body() {
    let response = ApiError::Unauthorized { location: here() }.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["status"], 401);
    assert!(json["message"].as_str().unwrap().contains("Authentication required"));
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn email_in_use_maps_to_400() {
    let response = ApiError::EmailInUse {
        email: "a@x.com".to_string(),
        location: here(),
    }
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "EMAIL_IN_USE");
    assert!(json["message"].as_str().unwrap().contains("a@x.com"));
}

#[tokio::test]
async fn provider_conflict_maps_to_409_and_names_the_existing_origin() {
    let response = ApiError::ProviderConflict {
        email: "a@x.com".to_string(),
        existing: AuthProvider::Kakao,
        location: here(),
    }
    .into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "PROVIDER_CONFLICT");
    assert!(json["message"].as_str().unwrap().contains("KAKAO"));
}

#[tokio::test]
async fn internal_error_does_not_leak_detail() {
    let response = ApiError::Internal {
        message: "sqlite broke at /var/db/wig.db".to_string(),
        location: here(),
    }
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    // The internal message is logged, not returned
    assert!(!json["message"].as_str().unwrap().contains("sqlite"));
}
