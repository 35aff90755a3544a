use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::TokenService;
use crate::features::customers::dtos::{
    CustomerResponseDto, RegisterCustomerDto, TokenResponseDto,
};
use crate::features::customers::models::NewCustomer;
use crate::features::customers::repositories::CustomerRepository;
use crate::shared::avatar::gravatar_url;
use crate::shared::password::PasswordHasher;

/// Service for customer registration and lookup
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
    hasher: PasswordHasher,
    token_service: Arc<TokenService>,
}

impl CustomerService {
    pub fn new(
        repository: Arc<dyn CustomerRepository>,
        hasher: PasswordHasher,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            repository,
            hasher,
            token_service,
        }
    }

    /// Register a new customer and issue a session token.
    ///
    /// Expects `dto` to be validated already. The email lookup is only a fast
    /// path: a concurrent registration can still win the race, in which case
    /// the store rejects the insert with `DuplicateAccount`.
    pub async fn register(&self, dto: RegisterCustomerDto) -> Result<TokenResponseDto> {
        if self.repository.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::DuplicateAccount);
        }

        let avatar = gravatar_url(&dto.email);
        let password_hash = self.hasher.hash(&dto.password).await?;

        let customer = self
            .repository
            .insert(NewCustomer {
                name: dto.name,
                email: dto.email,
                password_hash,
                avatar,
                phone: dto.phone,
            })
            .await?;

        tracing::info!("Customer registered: id={}", customer.id);

        let token = self.token_service.issue(customer.id)?;

        Ok(TokenResponseDto { token })
    }

    /// Public profile of a registered customer
    pub async fn get_profile(&self, id: Uuid) -> Result<CustomerResponseDto> {
        self.repository
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }
}
