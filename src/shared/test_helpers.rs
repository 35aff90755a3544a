use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::TokenService;
use crate::features::customers::models::{Customer, NewCustomer};
use crate::features::customers::repositories::CustomerRepository;
use crate::features::customers::CustomerService;
use crate::shared::password::PasswordHasher;

pub const TEST_JWT_SECRET: &str = "test-secret";
pub const TEST_JWT_EXPIRES_IN_SECS: u64 = 3_600_000;

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expires_in: Duration::from_secs(TEST_JWT_EXPIRES_IN_SECS),
        // bcrypt minimum, keeps tests fast
        bcrypt_cost: 4,
    }
}

/// Service wired to the given store, plus the token service it signs with
pub fn test_service(
    repository: Arc<dyn CustomerRepository>,
) -> (Arc<CustomerService>, Arc<TokenService>) {
    let config = test_auth_config();
    let tokens = Arc::new(TokenService::new(&config));
    let service = Arc::new(CustomerService::new(
        repository,
        PasswordHasher::new(config.bcrypt_cost),
        Arc::clone(&tokens),
    ));
    (service, tokens)
}

/// In-memory store with the same uniqueness guarantee as the Postgres table
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: Mutex<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn count(&self) -> usize {
        self.customers.lock().unwrap().len()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().find(|c| c.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer> {
        let mut customers = self.customers.lock().unwrap();
        if customers.iter().any(|c| c.email == customer.email) {
            return Err(AppError::DuplicateAccount);
        }

        let created = Customer {
            id: Uuid::new_v4(),
            name: customer.name,
            email: customer.email,
            password: customer.password_hash,
            avatar: customer.avatar,
            phone: customer.phone,
            created_at: Utc::now(),
        };
        customers.push(created.clone());
        Ok(created)
    }
}

/// Store whose every call fails, for exercising the server-error path
pub struct UnavailableCustomerRepository;

#[async_trait]
impl CustomerRepository for UnavailableCustomerRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Option<Customer>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Customer>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _customer: NewCustomer) -> Result<Customer> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}
