//! Grepable error codes shared by every error type in the crate.
//!
//! DESIGN
//! ======
//! Each concern owns a `thiserror` enum. The `ErrorCode` trait gives every
//! variant a stable `E_*` code so HTTP bodies and logs can be searched
//! without parsing human-readable messages.

use serde::Serialize;

/// Grepable error code attached to a typed error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

/// JSON body rendered for every failed preview request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl ErrorBody {
    #[must_use]
    pub fn from_error(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { code: err.error_code(), message: err.to_string() }
    }
}
