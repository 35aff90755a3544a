use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::customers::{dtos as customers_dtos, handlers as customers_handlers};
use crate::shared::types::{ApiResponse, FieldError};

#[derive(OpenApi)]
#[openapi(
    paths(
        customers_handlers::register_customer,
        customers_handlers::get_current_customer,
    ),
    components(
        schemas(
            FieldError,
            customers_dtos::RegisterCustomerDto,
            customers_dtos::TokenResponseDto,
            customers_dtos::CustomerResponseDto,
            ApiResponse<customers_dtos::CustomerResponseDto>,
        )
    ),
    tags(
        (name = "customers", description = "Customer registration and profile"),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

/// Bearer session token scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Overrides OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
