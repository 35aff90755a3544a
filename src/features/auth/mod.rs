//! Session tokens for registered customers.
//!
//! Tokens are HS256 JWTs signed with the process-wide secret from
//! [`AuthConfig`](crate::core::config::AuthConfig). The payload only carries
//! the customer id.

pub mod model;
pub mod services;

pub use services::TokenService;
