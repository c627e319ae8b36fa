use std::fmt;

/// Unified error type for the scorehub crate.
///
/// Tool-level business failures (unknown country, empty input, ...) are not
/// errors at this level: they are returned as structured payloads so the
/// reasoning oracle can observe them and adapt. Only conditions fatal to a
/// session surface here.
#[derive(Debug, Clone)]
pub enum HubError {
    /// Invalid input provided by the caller.
    InvalidInput(String),
    /// The reasoning oracle failed (network, protocol, provider).
    Oracle(String),
    /// Internal error.
    Internal(String),
}

impl fmt::Display for HubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            HubError::Oracle(msg) => write!(f, "oracle failure: {msg}"),
            HubError::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for HubError {}

/// Result type alias using [`HubError`].
pub type HubResult<T> = Result<T, HubError>;
