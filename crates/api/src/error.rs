// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the submission adapter and backend collaborators.

use chef_booking::CoreError;
use thiserror::Error;

/// Shown when the backend gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors from talking to the booking backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Booking API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the error body, when present.
        message: Option<String>,
        /// Raw response body.
        body: String,
    },

    /// The wizard refused the operation.
    #[error("Wizard error: {0}")]
    Wizard(#[from] CoreError),

    /// The in-flight submission was aborted before it settled.
    #[error("Submission was cancelled before it completed")]
    Cancelled,
}

impl ApiError {
    /// The message to show the user.
    ///
    /// Uses the server's message when one is available, a generic message otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Wizard(err) => err.to_string(),
            _ => String::from(GENERIC_ERROR_MESSAGE),
        }
    }
}

/// Result type for backend operations.
pub type ApiResult<T> = Result<T, ApiError>;
