//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use doorlog_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
#[allow(unused_assignments)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("Missing required settings: {missing}")]
    #[diagnostic(
        code(doorlog::missing_config),
        help(
            "Set AxisAddress, AxisUser and AxisPassword in the environment,\n\
             pass --ipAddress, --user and --password,\n\
             or add address, user and password to the config file."
        )
    )]
    MissingConfig { missing: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(doorlog::validation))]
    Validation { field: String, reason: String },

    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(doorlog::no_config),
        help("Check the --config / DOORLOG_CONFIG path, or unset it to use the default location.")
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(doorlog::config))]
    Config(Box<figment::Error>),

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to door controller at {url}")]
    #[diagnostic(
        code(doorlog::connection_failed),
        help(
            "Check that the controller is reachable and the address is right.\n\
             URL: {url}\n\
             Try: --httpmethod HTTP if the device does not serve HTTPS"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request to door controller timed out")]
    #[diagnostic(
        code(doorlog::timeout),
        help("Increase --timeout or check controller responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(doorlog::auth_failed),
        help("Verify the device account in AxisUser / AxisPassword (or --user / --password).")
    )]
    AuthFailed { message: String },

    // ── Device replies ───────────────────────────────────────────────
    #[error("Door controller rejected the event log request (HTTP {status})")]
    #[diagnostic(
        code(doorlog::events_rejected),
        help(
            "Device said: {message}\n\
             Check --fromDate and that the account may read the event log."
        )
    )]
    EventsRejected { status: u16, message: String },

    #[error("Device API error: {message}")]
    #[diagnostic(code(doorlog::api_error))]
    Api { message: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingConfig { .. }
            | Self::Validation { .. }
            | Self::NoConfig { .. }
            | Self::Config(_) => exit_code::USAGE,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::EventsRejected { .. } => exit_code::SUCCESS,
            Self::Api { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Timeout => CliError::Timeout,
            CoreError::EventsRejected { status, message } => {
                CliError::EventsRejected { status, message }
            }
            CoreError::Api { message } => CliError::Api { message },
            CoreError::Config { message } => CliError::Validation {
                field: "ipAddress".into(),
                reason: message,
            },
        }
    }
}
