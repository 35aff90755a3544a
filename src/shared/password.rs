use crate::core::error::{AppError, Result};

/// bcrypt wrapper that keeps hashing off the async worker threads
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash with a freshly generated salt
    pub async fn hash(&self, password: &str) -> Result<String> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_is_not_plaintext_and_verifies() {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("secret1").await.unwrap();

        assert_ne!(hash, "secret1");
        assert!(hash.starts_with("$2b$04$"));
        assert!(bcrypt::verify("secret1", &hash).unwrap());
        assert!(!bcrypt::verify("secret2", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_each_hash_uses_a_fresh_salt() {
        let hasher = PasswordHasher::new(4);
        let first = hasher.hash("secret1").await.unwrap();
        let second = hasher.hash("secret1").await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_invalid_cost_is_internal_error() {
        let hasher = PasswordHasher::new(2);
        assert!(matches!(
            hasher.hash("secret1").await,
            Err(AppError::Internal(_))
        ));
    }
}
