//! Customer accounts: registration and the current customer's profile.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/customers` | No | Register customer, returns session token |
//! | GET | `/api/customers/me` | Yes | Current customer profile |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCustomerRepository;
pub use services::CustomerService;
