use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::customers::models::{Customer, NewCustomer};

/// Storage for customer records.
///
/// Implementations must enforce email uniqueness themselves and report a
/// clash on insert as [`AppError::DuplicateAccount`]; a prior
/// `find_by_email` miss does not guarantee the insert will succeed.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>>;

    async fn insert(&self, customer: NewCustomer) -> Result<Customer>;
}

/// Postgres-backed store, relies on the `customers_email_key` constraint
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, password, avatar, phone, created_at
            FROM customers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, email, password, avatar, phone, created_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer> {
        sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, email, password, avatar, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password, avatar, phone, created_at
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.password_hash)
        .bind(&customer.avatar)
        .bind(&customer.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateAccount;
                }
            }
            tracing::error!("Failed to insert customer: {:?}", e);
            AppError::Database(e)
        })
    }
}
