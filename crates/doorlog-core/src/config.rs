// ── Runtime report configuration ──
//
// Describes which device to query and from when. Carries credential data
// but never touches disk or the environment; the CLI builds a
// `ReportConfig` and hands it in.

use std::time::Duration;

use chrono::NaiveDate;
use secrecy::SecretString;
use url::Url;
use vapix_api::{Credentials, Scheme, TransportConfig, VapixClient};

use crate::error::CoreError;

/// Configuration for one reporting run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Device address, `host` or `host:port`.
    pub address: String,
    pub username: String,
    pub password: SecretString,
    pub scheme: Scheme,
    /// Lower bound for event timestamps, `YYYY-MM-DDTHH:MM:SS` device-local.
    pub from_date: String,
    /// Request timeout. `None` = HTTP client default.
    pub timeout: Option<Duration>,
}

impl ReportConfig {
    /// Root URL of the device.
    pub fn device_url(&self) -> Result<Url, CoreError> {
        VapixClient::device_url(self.scheme, &self.address).map_err(|e| CoreError::Config {
            message: format!("invalid device address '{}': {e}", self.address),
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    /// Transport for this device. Certificates are not verified.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig::default().with_timeout(self.timeout)
    }
}

/// Midnight at the start of `day`, in the event logger's filter format.
pub fn default_from_date(day: NaiveDate) -> String {
    format!("{}T00:00:00", day.format("%Y-%m-%d"))
}
