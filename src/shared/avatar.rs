use sha2::{Digest, Sha256};

use crate::shared::constants::{AVATAR_DEFAULT, AVATAR_RATING, AVATAR_SIZE};

const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

/// Gravatar URL for an email address.
///
/// Pure: the address is trimmed and lowercased before hashing, so the URL
/// only depends on the email and the fixed size/rating/default policy.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let hash = hex::encode(Sha256::digest(normalized.as_bytes()));

    format!(
        "{}/{}?s={}&r={}&d={}",
        GRAVATAR_BASE_URL, hash, AVATAR_SIZE, AVATAR_RATING, AVATAR_DEFAULT
    )
}
