//! Failure taxonomy for a single shipping attempt.

use thiserror::Error;

/// Error type returned by pre-send and post-send callbacks.
///
/// Callback failures pass through [`HookError::Callback`] with their own
/// `Display` text; the hook never rewraps or reformats them.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a [`fire`](crate::HttpHook::fire) call failed.
///
/// Every variant is terminal for the attempt: nothing is retried and the
/// caller (the host logging framework) decides how to react.
#[derive(Debug, Error)]
pub enum HookError {
    /// The record could not be serialised to JSON.
    #[error("failed to marshal payload due to error {0}")]
    Marshal(#[source] serde_json::Error),

    /// The configured endpoint is not a valid absolute URL.
    #[error("failed to build request due to error {0}")]
    BuildRequest(#[source] url::ParseError),

    /// The exchange failed below HTTP: DNS, connect, TLS, or I/O.
    #[error("failed to perform request due to error {0}")]
    Transport(#[source] Box<ureq::Transport>),

    /// The server answered with a status other than 200 or 201.
    #[error("failed to post payload, the server responded with a status of {0}")]
    BadStatus(u16),

    /// A pre-send or post-send callback rejected the exchange.
    #[error("{0}")]
    Callback(CallbackError),
}
