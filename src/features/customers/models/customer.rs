use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::customers::dtos::CustomerResponseDto;

/// Database model for customer
#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// bcrypt hash, never the plaintext
    pub password: String,
    pub avatar: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A customer ready to be inserted; the store assigns `id` and `created_at`
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
    pub phone: Option<String>,
}

impl From<Customer> for CustomerResponseDto {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            avatar: c.avatar,
            phone: c.phone,
            created_at: c.created_at,
        }
    }
}
