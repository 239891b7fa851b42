// Centralized error handling for the board service

use crate::models::api::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Errors from login and session gating
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingCredentials,

    #[error("Malformed login request")]
    MalformedRequest,

    /// Deliberately generic: never reveals which credential field failed
    #[error("Invalid credentials. Check name, password and role")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Your role does not allow updating this stage")]
    StageNotPermitted,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
            AuthError::MalformedRequest => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::NotLoggedIn => StatusCode::UNAUTHORIZED,
            AuthError::StageNotPermitted => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Errors from order validation and lookups
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date in field {field}: {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Unknown stage: {0}")]
    UnknownStage(String),

    #[error("No layout uploaded for this order")]
    LayoutNotFound,
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match &self {
            OrderError::MissingField(_) => StatusCode::BAD_REQUEST,
            OrderError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
            OrderError::UnknownStage(_) => StatusCode::BAD_REQUEST,
            OrderError::LayoutNotFound => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Umbrella error for handlers that can fail both ways
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Auth(e) => e.into_response(),
            ApiError::Order(e) => e.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(
            AuthError::MissingCredentials.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::NotLoggedIn.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::StageNotPermitted.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_order_error_status_codes() {
        assert_eq!(
            OrderError::MissingField("client").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            OrderError::UnknownStage("painting".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            OrderError::LayoutNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_credential_failure_message_is_generic() {
        // same message whichever field was wrong
        let message = AuthError::InvalidCredentials.to_string();
        assert!(!message.to_lowercase().contains("password was"));
        assert_eq!(message, "Invalid credentials. Check name, password and role");
    }
}
