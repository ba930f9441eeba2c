use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use std::fmt;
use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// A string parameter that should have been a numeric id or amount.
    InvalidId(String),
    /// Explicit not-found from the lookups that report it; the message text
    /// is part of the API contract and differs per operation.
    NotFound(String),
    /// Natural-key collision on a guarded insert.
    AlreadyExists(String),
    /// Anything the storage layer refused to do.
    Database(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidId(msg) => write!(f, "invalid id: {}", msg),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::AlreadyExists(msg) => write!(f, "{}", msg),
            AppError::Database(msg) => write!(f, "query: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ParseIntError> for AppError {
    fn from(err: ParseIntError) -> Self {
        AppError::InvalidId(err.to_string())
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The API folds every failure kind into a 500 with a plain-text
        // body; clients distinguish outcomes by message, not status.
        tracing::error!("request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
