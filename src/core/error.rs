use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::shared::types::{ApiResponse, FieldError};

pub const DUPLICATE_ACCOUNT_MESSAGE: &str = "Customer already exists";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    /// Email already registered. Holds no customer data.
    #[error("Duplicate account")]
    DuplicateAccount,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl AppError {
    /// Flatten validator output, ordered by the request's field order.
    ///
    /// Fields missing from `field_order` go last, by name.
    pub fn from_validation(errors: ValidationErrors, field_order: &[&str]) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(|e| {
                        let msg = e
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string());
                        FieldError::new(field.to_string(), msg)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        // field_errors() is a HashMap
        fields.sort_by_key(|e| {
            let position = field_order
                .iter()
                .position(|f| Some(*f) == e.param.as_deref())
                .unwrap_or(field_order.len());
            (position, e.param.clone())
        });

        AppError::Validation(fields)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                    None,
                )
            }
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(errors),
            ),
            AppError::DuplicateAccount => {
                tracing::warn!("Registration rejected, email already registered");
                (
                    StatusCode::BAD_REQUEST,
                    DUPLICATE_ACCOUNT_MESSAGE.to_string(),
                    Some(vec![FieldError::new("email", DUPLICATE_ACCOUNT_MESSAGE)]),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![FieldError::message(msg)]),
            ),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                    None,
                )
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_validation_errors_follow_field_order() {
        let mut errors = ValidationErrors::new();
        let mut password = ValidationError::new("length");
        password.message = Some("too short".into());
        errors.add("password", password);
        let mut email = ValidationError::new("email");
        email.message = Some("bad email".into());
        errors.add("email", email);
        let mut name = ValidationError::new("length");
        name.message = Some("required".into());
        errors.add("name", name);

        match AppError::from_validation(errors, &["name", "email", "password"]) {
            AppError::Validation(fields) => {
                assert_eq!(
                    fields,
                    vec![
                        FieldError::new("name", "required"),
                        FieldError::new("email", "bad email"),
                        FieldError::new("password", "too short"),
                    ]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_error_without_message_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));

        match AppError::from_validation(errors, &["name"]) {
            AppError::Validation(fields) => {
                assert_eq!(fields, vec![FieldError::new("name", "length")]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_unlisted_fields_are_reported_last() {
        let mut errors = ValidationErrors::new();
        errors.add("zeta", ValidationError::new("custom"));
        errors.add("alpha", ValidationError::new("custom"));
        errors.add("email", ValidationError::new("email"));

        match AppError::from_validation(errors, &["email"]) {
            AppError::Validation(fields) => {
                let params: Vec<_> = fields.iter().filter_map(|f| f.param.as_deref()).collect();
                assert_eq!(params, vec!["email", "alpha", "zeta"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_account_response_names_field_only() {
        let response = AppError::DuplicateAccount.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["errors"],
            serde_json::json!([{ "msg": "Customer already exists", "param": "email" }])
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::DuplicateAccount.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("signing failed".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Unauthorized("no token".into())
                .into_response()
                .status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
