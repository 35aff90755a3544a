use lazy_static::lazy_static;
use regex::Regex;
use validator::{ValidateEmail, ValidationError};

use crate::shared::constants::MAX_TEXT_COLUMN_CHARS;

lazy_static! {
    /// Domain part of an email address, must end in a top-level domain
    /// - Valid: "x.com", "mail.example.co.uk", "xn--80ak6aa92e.xn--p1ai"
    /// - Invalid: "x", "localhost", "x.c", "x.123", "-x.com", "x..com"
    pub static ref EMAIL_DOMAIN_REGEX: Regex = Regex::new(
        r"(?i)^(?:[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?\.)+(?:\p{L}{2,}|xn--[a-z0-9-]{2,})$"
    )
    .unwrap();
}

/// Syntactically valid address with a dotted domain that fits the column
pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    let has_tld = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| EMAIL_DOMAIN_REGEX.is_match(domain));

    if email.chars().count() <= MAX_TEXT_COLUMN_CHARS && email.validate_email() && has_tld {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

pub fn validate_text_column(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() <= MAX_TEXT_COLUMN_CHARS {
        Ok(())
    } else {
        Err(ValidationError::new("length"))
    }
}
