use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedCustomer;
use crate::shared::types::FieldError;

pub const INVALID_BODY_MESSAGE: &str = "Request body does not match the expected fields";

/// JSON body extractor
///
/// The body is parsed as a JSON document, then mapped onto `T`. A well-formed
/// body of the wrong shape is a validation failure. Parser details are logged,
/// never returned.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(document) = Json::<Value>::from_request(req, state)
            .await
            .map_err(unreadable_body)?;

        serde_json::from_value(document).map(Self).map_err(|e| {
            tracing::debug!("Request body has the wrong shape: {}", e);
            AppError::Validation(vec![FieldError::message(INVALID_BODY_MESSAGE)])
        })
    }
}

fn unreadable_body(rejection: JsonRejection) -> AppError {
    tracing::debug!("Unreadable request body: {}", rejection.body_text());

    let message = match rejection {
        JsonRejection::JsonSyntaxError(_) => "Request body is not valid JSON",
        JsonRejection::MissingJsonContentType(_) => {
            "Expected request with `Content-Type: application/json`"
        }
        _ => "Failed to read request body",
    };
    AppError::BadRequest(message.to_string())
}

impl<S> FromRequestParts<S> for AuthenticatedCustomer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedCustomer>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}
