use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::actor_framework::StoreError;
use crate::error::{ProductError, UserError};

/// Every failure the HTTP layer can report, matched to a status code.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[allow(dead_code)]
    #[error("{0}")]
    Unauthorized(String),
    #[allow(dead_code)]
    #[error("{0}")]
    InvalidOperation(String),
    #[error("{0}")]
    Internal(String),
}

/// JSON body written for every error response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub details: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short category string carried in the `details` field.
    pub fn details(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Invalid argument provided",
            ApiError::NotFound(_) => "The requested resource was not found",
            ApiError::Conflict(_) => "The resource already exists",
            ApiError::Unauthorized(_) => "Access denied",
            ApiError::InvalidOperation(_) => "Invalid operation",
            ApiError::Internal(_) => "Please try again later or contact support",
        }
    }

    /// Internal errors never leak their cause to the caller.
    pub fn body(&self) -> ErrorBody {
        let message = match self {
            ApiError::Internal(_) => "An internal server error occurred".to_string(),
            other => other.to_string(),
        };
        ErrorBody {
            status_code: self.status().as_u16(),
            message,
            details: self.details(),
            timestamp: Utc::now(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(cause) => error!(error = %cause, "An unexpected error occurred"),
            other => warn!(status = other.status().as_u16(), error = %other, "Request failed"),
        }
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::ActorClosed | StoreError::ActorDropped => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::MissingPayload
            | ProductError::InvalidArgument(_)
            | ProductError::DiscountOutOfRange(_) => ApiError::Validation(err.to_string()),
            ProductError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProductError::Overflow => ApiError::Internal(err.to_string()),
            ProductError::Store(store) => store.into(),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::MissingPayload | UserError::InvalidArgument(_) => ApiError::Validation(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::Store(store) => store.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::Validation("v".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("n".into()), StatusCode::NOT_FOUND),
            (ApiError::Conflict("c".into()), StatusCode::CONFLICT),
            (ApiError::Unauthorized("u".into()), StatusCode::UNAUTHORIZED),
            (ApiError::InvalidOperation("i".into()), StatusCode::BAD_REQUEST),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.status(), status, "{err:?}");
        }
    }

    #[test]
    fn test_domain_errors_map_to_taxonomy() {
        assert_eq!(
            ApiError::from(ProductError::InvalidArgument("Product name is required".into())),
            ApiError::Validation("Product name is required".into())
        );
        assert_eq!(
            ApiError::from(ProductError::DiscountOutOfRange(Decimal::from(150))).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(UserError::AlreadyExists("a@b.com".into())),
            ApiError::Conflict("User with email a@b.com already exists".into())
        );
        assert_eq!(
            ApiError::from(UserError::NotFound("9".into())),
            ApiError::NotFound("User with ID 9 not found".into())
        );
        assert_eq!(
            ApiError::from(UserError::Store(StoreError::NotFound {
                kind: "User",
                id: "9".into()
            })),
            ApiError::NotFound("User with ID 9 not found".into())
        );
        assert_eq!(
            ApiError::from(ProductError::Store(StoreError::ActorClosed)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(ProductError::Overflow).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_cause() {
        let body = ApiError::Internal("store actor closed".into()).body();
        assert_eq!(body.status_code, 500);
        assert_eq!(body.message, "An internal server error occurred");
        assert_eq!(body.details, "Please try again later or contact support");
    }

    #[tokio::test]
    async fn test_response_is_camel_case_json() {
        let before = Utc::now();
        let response = ApiError::Validation("Invalid email address".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["statusCode"], 400);
        assert_eq!(json["message"], "Invalid email address");
        assert_eq!(json["details"], "Invalid argument provided");

        let timestamp: DateTime<Utc> = json["timestamp"].as_str().unwrap().parse().unwrap();
        assert!(timestamp >= before);
    }
}
