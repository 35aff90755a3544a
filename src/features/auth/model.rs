use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Session token payload: `{ "customer": { "id": ... }, "iat": ..., "exp": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub customer: CustomerClaim,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerClaim {
    pub id: Uuid,
}

/// Customer identity extracted from a verified bearer token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedCustomer {
    pub customer_id: Uuid,
}

impl From<Claims> for AuthenticatedCustomer {
    fn from(claims: Claims) -> Self {
        Self {
            customer_id: claims.customer.id,
        }
    }
}
