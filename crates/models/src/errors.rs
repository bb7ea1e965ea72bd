use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// First field that failed validation, in declaration order.
    #[error("Invalid {field}")]
    Validation { field: &'static str },
}

impl ModelError {
    pub fn invalid(field: &'static str) -> Self { Self::Validation { field } }
}
