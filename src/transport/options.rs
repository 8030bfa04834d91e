//! Connection configuration.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use ng_finder::transport::ConnectionOptions;
//!
//! # fn example() -> ng_finder::Result<()> {
//! let options = ConnectionOptions::builder()
//!     .url("ws://127.0.0.1:4444/session")
//!     .command_timeout(Duration::from_secs(10))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for a single command round trip.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for the WebSocket handshake.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on requests awaiting a response.
pub const DEFAULT_MAX_PENDING: usize = 100;

// ============================================================================
// ConnectionOptions
// ============================================================================

/// Validated connection settings.
#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    /// Remote end endpoint (`ws://` or `wss://`).
    pub url: Url,
    /// Maximum time to wait for each response.
    pub command_timeout: Duration,
    /// Maximum time to wait for the handshake.
    pub connect_timeout: Duration,
    /// Maximum number of in-flight requests.
    pub max_pending: usize,
}

impl ConnectionOptions {
    /// Creates a new options builder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConnectionOptionsBuilder {
        ConnectionOptionsBuilder::new()
    }
}

// ============================================================================
// ConnectionOptionsBuilder
// ============================================================================

/// Builder for [`ConnectionOptions`].
#[derive(Debug, Default, Clone)]
pub struct ConnectionOptionsBuilder {
    url: Option<String>,
    command_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    max_pending: Option<usize>,
}

impl ConnectionOptionsBuilder {
    /// Creates a builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the remote end endpoint.
    #[inline]
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the per-command timeout.
    #[inline]
    #[must_use]
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = Some(timeout);
        self
    }

    /// Sets the handshake timeout.
    #[inline]
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the in-flight request cap.
    #[inline]
    #[must_use]
    pub fn max_pending(mut self, max: usize) -> Self {
        self.max_pending = Some(max);
        self
    }

    /// Builds the options with validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the url is missing, unparsable or not `ws`/`wss`
    /// - [`Error::Config`] if a timeout or the pending cap is zero
    pub fn build(self) -> Result<ConnectionOptions> {
        let url = self.validate_url()?;

        let command_timeout = self.command_timeout.unwrap_or(DEFAULT_COMMAND_TIMEOUT);
        let connect_timeout = self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        if command_timeout.is_zero() || connect_timeout.is_zero() {
            return Err(Error::config("Timeouts must be greater than zero"));
        }

        let max_pending = self.max_pending.unwrap_or(DEFAULT_MAX_PENDING);
        if max_pending == 0 {
            return Err(Error::config("max_pending must be at least 1"));
        }

        Ok(ConnectionOptions {
            url,
            command_timeout,
            connect_timeout,
            max_pending,
        })
    }
}

// ============================================================================
// Validation
// ============================================================================

impl ConnectionOptionsBuilder {
    /// Validates the endpoint configuration.
    fn validate_url(&self) -> Result<Url> {
        let raw = self.url.as_deref().ok_or_else(|| {
            Error::config(
                "Remote end url is required. Use .url() to set it.\n\
                 Example: ConnectionOptions::builder().url(\"ws://127.0.0.1:4444\")",
            )
        })?;

        let url = Url::parse(raw).map_err(|e| Error::config(format!("Invalid url '{raw}': {e}")))?;

        match url.scheme() {
            "ws" | "wss" => Ok(url),
            other => Err(Error::config(format!(
                "Unsupported url scheme '{other}', expected ws or wss"
            ))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConnectionOptions::builder()
            .url("ws://127.0.0.1:4444")
            .build()
            .expect("valid options");

        assert_eq!(options.command_timeout, DEFAULT_COMMAND_TIMEOUT);
        assert_eq!(options.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(options.max_pending, DEFAULT_MAX_PENDING);
        assert_eq!(options.url.scheme(), "ws");
    }

    #[test]
    fn test_missing_url() {
        let err = ConnectionOptions::builder().build().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_rejects_http_scheme() {
        let err = ConnectionOptions::builder()
            .url("http://127.0.0.1:4444")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported url scheme 'http'"));
    }

    #[test]
    fn test_rejects_zero_values() {
        let zero_timeout = ConnectionOptions::builder()
            .url("wss://remote.example/session")
            .command_timeout(Duration::ZERO)
            .build();
        assert!(zero_timeout.is_err());

        let zero_pending = ConnectionOptions::builder()
            .url("wss://remote.example/session")
            .max_pending(0)
            .build();
        assert!(zero_pending.is_err());
    }
}
