use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedCustomer;
use crate::features::customers::dtos::{
    CustomerResponseDto, RegisterCustomerDto, TokenResponseDto,
};
use crate::features::customers::services::CustomerService;
use crate::shared::types::ApiResponse;

/// Register a new customer
///
/// Validates the request, rejects already registered emails and returns a
/// signed session token for the new account.
#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = RegisterCustomerDto,
    responses(
        (status = 201, description = "Customer registered", body = TokenResponseDto),
        (status = 400, description = "Validation error or customer already exists"),
        (status = 500, description = "Server error")
    ),
    tag = "customers"
)]
pub async fn register_customer(
    State(service): State<Arc<CustomerService>>,
    AppJson(dto): AppJson<RegisterCustomerDto>,
) -> Result<(StatusCode, Json<TokenResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::from_validation(e, RegisterCustomerDto::FIELD_ORDER))?;

    let response = service.register(dto).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get the authenticated customer's profile
#[utoipa::path(
    get,
    path = "/api/customers/me",
    responses(
        (status = 200, description = "Customer profile", body = ApiResponse<CustomerResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Customer not found")
    ),
    tag = "customers",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_current_customer(
    customer: AuthenticatedCustomer,
    State(service): State<Arc<CustomerService>>,
) -> Result<Json<ApiResponse<CustomerResponseDto>>> {
    let profile = service.get_profile(customer.customer_id).await?;
    Ok(Json(ApiResponse::success(Some(profile), None)))
}
