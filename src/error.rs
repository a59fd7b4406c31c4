use rust_decimal::Decimal;
use thiserror::Error;

use crate::actor_framework::StoreError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product payload is required")]
    MissingPayload,
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Product with ID {0} not found")]
    NotFound(String),
    #[error("Discount percentage must be between 0 and 100, got {0}")]
    DiscountOutOfRange(Decimal),
    #[error("Monetary value exceeds the supported decimal range")]
    Overflow,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User payload is required")]
    MissingPayload,
    #[error("{0}")]
    InvalidArgument(String),
    #[error("User with ID {0} not found")]
    NotFound(String),
    #[error("User with email {0} already exists")]
    AlreadyExists(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmailError {
    #[error("Email delivery to {to} failed: {reason}")]
    Delivery { to: String, reason: String },
}
