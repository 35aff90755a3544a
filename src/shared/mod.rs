pub mod avatar;
pub mod constants;
pub mod password;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
