use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{Claims, CustomerClaim};

/// Issues and verifies customer session tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            expires_in: config.jwt_expires_in,
        }
    }

    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    /// Sign a token for the given customer id
    pub fn issue(&self, customer_id: Uuid) -> Result<String> {
        let iat = Utc::now().timestamp();
        let lifetime = i64::try_from(self.expires_in.as_secs())
            .map_err(|_| AppError::Internal("Token lifetime out of range".to_string()))?;

        let claims = Claims {
            customer: CustomerClaim { id: customer_id },
            iat,
            exp: iat.saturating_add(lifetime),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign session token: {}", e);
            AppError::Internal(format!("Failed to sign session token: {}", e))
        })
    }

    /// Check signature and expiry, returning the payload
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected session token: {}", e);
                AppError::Unauthorized("Token is not valid".to_string())
            })
    }
}
