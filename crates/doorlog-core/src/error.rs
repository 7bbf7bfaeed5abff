// ── Core error types ──
//
// User-facing errors from doorlog-core. The `From<vapix_api::Error>` impl
// translates transport-layer failures into domain variants; consumers
// never match on reqwest or serde errors directly.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to device at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request to device timed out")]
    Timeout,

    // ── Device replies ───────────────────────────────────────────────
    /// The event logger answered the fetch with a non-200 status.
    #[error("Event log request rejected by device (HTTP {status})")]
    EventsRejected { status: u16, message: String },

    #[error("Device API error: {message}")]
    Api { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<vapix_api::Error> for CoreError {
    fn from(err: vapix_api::Error) -> Self {
        match err {
            vapix_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            vapix_api::Error::Transport(ref e) if e.is_timeout() => CoreError::Timeout,
            vapix_api::Error::Transport(ref e) if e.is_connect() => CoreError::ConnectionFailed {
                url: e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string),
                reason: e.to_string(),
            },
            vapix_api::Error::Rejected { status, message } => CoreError::Api {
                message: format!("HTTP {status}: {message}"),
            },
            vapix_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid device URL: {e}"),
            },
            other => CoreError::Api {
                message: other.to_string(),
            },
        }
    }
}
