//! Registry error types

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid registry options: {0}")]
    InvalidOptions(String),
}
