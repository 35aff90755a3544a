mod customer;

pub use customer::{Customer, NewCustomer};
