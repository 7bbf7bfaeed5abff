// Shared transport configuration for building reqwest::Client instances.
//
// Axis devices ship with self-signed certificates, so HTTPS transports
// accept any certificate unless told otherwise. No request timeout is
// applied unless one is configured.

use std::fmt;
use std::time::Duration;

use crate::error::Error;

/// URL scheme used to reach the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    /// Interpret an `httpmethod` setting.
    ///
    /// Only the exact value `HTTP` selects plain HTTP. Absence or any other
    /// value falls back to HTTPS.
    pub fn from_method(method: Option<&str>) -> Self {
        match method {
            Some("HTTP") => Self::Http,
            _ => Self::Https,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Accept any server certificate (self-signed devices).
    pub danger_accept_invalid_certs: bool,
    /// Per-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            danger_accept_invalid_certs: true,
            timeout: None,
        }
    }
}

impl TransportConfig {
    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("doorlog/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}
