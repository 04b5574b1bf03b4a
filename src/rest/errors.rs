//! REST client error types and diagnostics.

use reqwest::StatusCode;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Error talking to the Stash API.
#[derive(Debug, Error)]
pub enum RestError {
    /// The caller supplied unusable input before any request was made.
    #[error("input error: {0}")]
    Input(String),

    /// The server answered with a non-success status.
    #[error("application failure with status code {status}: {reason}")]
    Response {
        status: StatusCode,
        reason: String,
        /// Messages from the Stash error envelope, when the body carried one
        errors: Vec<String>,
    },

    /// The request never completed.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid API URL")]
    Url(#[from] url::ParseError),

    #[error("failed to decode response body")]
    Decode(#[source] reqwest::Error),
}

impl RestError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RestError::Input(message) => Diagnostic::error(message.clone()),

            RestError::Response {
                status,
                reason,
                errors,
            } => {
                let mut diag = Diagnostic::error(format!(
                    "Stash answered with status {}: {}",
                    status.as_u16(),
                    reason
                ));

                for message in errors {
                    diag = diag.with_context(message.clone());
                }

                diag = match status.as_u16() {
                    401 | 403 => diag.with_suggestion(
                        "Check your username (-U) and the STASH_PASSWORD environment variable",
                    ),
                    404 => diag
                        .with_suggestion("Check the project key, user slug, and repository name"),
                    _ => diag,
                };

                diag
            }

            RestError::Transport { url, source } => {
                Diagnostic::error(format!("could not reach {}", url))
                    .with_context(source.to_string())
                    .with_suggestion("Check the Stash hostname (--host or [server] hostname)")
            }

            RestError::Url(source) => Diagnostic::error("invalid API URL")
                .with_context(source.to_string())
                .with_suggestion("Check the configured Stash hostname"),

            RestError::Decode(source) => {
                Diagnostic::error("Stash sent a response this client could not decode")
                    .with_context(source.to_string())
            }
        }
    }
}
