//! Errors
//!
//! `ApiError` is what the HTTP layer rejects with. The controller logs it and
//! collapses it into an `ErrorKind`, which is the only thing the user sees.

use thiserror::Error;

/// The five messages the error banner can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Unable to load todos")]
    Load,
    #[error("Title should not be empty")]
    EmptyTitle,
    #[error("Unable to add a todo")]
    Add,
    #[error("Unable to delete a todo")]
    Delete,
    #[error("Unable to update a todo")]
    Update,
}

/// Request failure from the todo API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid user id {0:?}")]
    InvalidUserId(String),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}
