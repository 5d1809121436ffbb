//! Error types for fia-doc-watch.
//!
//! This module defines the error types returned by a watch pass and its
//! capabilities.

/// Error type for watch operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The listing page could not be fetched (transport, timeout or non-2xx status).
    #[error("Fetching the listing page failed: {0}")]
    Fetch(String),

    /// The notification destination rejected the message or was unreachable.
    #[error("Sending the notification failed: {0}")]
    Notify(String),

    /// Required settings are absent at startup.
    #[error("Missing required configuration: {0}")]
    ConfigurationMissing(String),

    /// An optional setting is present but cannot be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The state artifact could not be decoded in any supported encoding.
    ///
    /// Never escapes [`crate::SeenStateStore::load`], which degrades it to empty state.
    #[error("State file is unreadable: {0}")]
    StateCorrupt(String),

    /// The state artifact could not be written.
    #[error("State file I/O failed: {0}")]
    State(#[from] std::io::Error),
}

/// Result type alias for watch operations.
pub type Result<T> = std::result::Result<T, Error>;
