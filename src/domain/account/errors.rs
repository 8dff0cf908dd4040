//! Account Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Email must not be empty")]
    EmptyEmail,
}
