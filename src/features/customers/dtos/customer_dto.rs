use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::validation::{validate_email_address, validate_text_column};

/// Request DTO for customer registration
///
/// Missing and `null` fields become empty so they show up as rule violations
/// instead of a JSON parse error. Numbers and booleans are read as text.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegisterCustomerDto {
    #[serde(default, deserialize_with = "text_or_empty")]
    #[validate(
        length(min = 1, message = "Name is required!"),
        custom(
            function = "validate_text_column",
            message = "Name must be 255 characters or fewer!"
        )
    )]
    pub name: String,

    #[serde(default, deserialize_with = "text_or_empty")]
    #[validate(custom(
        function = "validate_email_address",
        message = "Please include valid email!"
    ))]
    pub email: String,

    #[serde(default, deserialize_with = "text_or_empty")]
    #[validate(length(
        min = 6,
        message = "Please enter a password with 6 or more characters!"
    ))]
    pub password: String,

    #[serde(default, deserialize_with = "optional_text")]
    #[validate(length(
        max = 10,
        message = "Please enter a valid mobile number!"
    ))]
    pub phone: Option<String>,
}

impl RegisterCustomerDto {
    /// Order in which violated rules are reported
    pub const FIELD_ORDER: &'static [&'static str] = &["name", "email", "password", "phone"];
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(String::new()),
        Some(value) => scalar_text(value),
    }
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)?
        .map(scalar_text)
        .transpose()
}

fn scalar_text<E: de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(E::custom("expected a text value")),
    }
}

/// Response DTO for a successful registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponseDto {
    /// Signed session token
    pub token: String,
}

/// Public view of a customer, never includes the password hash
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegisterCustomerDto {
        RegisterCustomerDto {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
            phone: Some("5551234".to_string()),
        }
    }

    fn failed_fields(dto: &RegisterCustomerDto) -> Vec<String> {
        let mut fields: Vec<String> = dto
            .validate()
            .unwrap_err()
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort();
        fields
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_phone_is_optional() {
        let dto = RegisterCustomerDto {
            phone: None,
            ..valid()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_password_boundary() {
        let five = RegisterCustomerDto {
            password: "12345".to_string(),
            ..valid()
        };
        assert_eq!(failed_fields(&five), vec!["password"]);

        let six = RegisterCustomerDto {
            password: "123456".to_string(),
            ..valid()
        };
        assert!(six.validate().is_ok());
    }

    #[test]
    fn test_phone_longer_than_ten_fails() {
        let dto = RegisterCustomerDto {
            phone: Some("12345678901".to_string()),
            ..valid()
        };
        assert_eq!(failed_fields(&dto), vec!["phone"]);
    }

    #[test]
    fn test_name_fits_column() {
        let longest = RegisterCustomerDto {
            name: "a".repeat(255),
            ..valid()
        };
        assert!(longest.validate().is_ok());

        let too_long = RegisterCustomerDto {
            name: "a".repeat(256),
            ..valid()
        };
        assert_eq!(failed_fields(&too_long), vec!["name"]);
    }

    #[test]
    fn test_email_without_tld_fails() {
        let dto = RegisterCustomerDto {
            email: "a@x".to_string(),
            ..valid()
        };
        assert_eq!(failed_fields(&dto), vec!["email"]);
    }

    #[test]
    fn test_empty_request_reports_every_rule() {
        let dto = RegisterCustomerDto::default();
        assert_eq!(failed_fields(&dto), vec!["email", "name", "password"]);
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let dto: RegisterCustomerDto = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(dto.name, "");
        assert_eq!(dto.password, "");
        assert!(dto.phone.is_none());
    }

    #[test]
    fn test_null_fields_deserialize_to_empty() {
        let dto: RegisterCustomerDto =
            serde_json::from_str(r#"{"name":null,"email":null,"password":null,"phone":null}"#)
                .unwrap();
        assert_eq!(dto.name, "");
        assert_eq!(dto.email, "");
        assert_eq!(dto.password, "");
        assert!(dto.phone.is_none());
    }

    #[test]
    fn test_scalar_fields_are_read_as_text() {
        let dto: RegisterCustomerDto =
            serde_json::from_str(r#"{"name":"A","email":"a@x.com","password":123456,"phone":5551234}"#)
                .unwrap();
        assert_eq!(dto.password, "123456");
        assert_eq!(dto.phone.as_deref(), Some("5551234"));
    }

    #[test]
    fn test_nested_values_are_rejected() {
        let result = serde_json::from_str::<RegisterCustomerDto>(r#"{"name":["A"]}"#);
        assert!(result.is_err());
    }
}
