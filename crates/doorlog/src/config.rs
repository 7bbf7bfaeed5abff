//! CLI-owned configuration: optional TOML file, flag/env precedence, and
//! translation to `doorlog_core::ReportConfig`.
//!
//! clap has already merged each flag with its environment variable; this
//! module layers the config file underneath and fills in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use doorlog_core::{ReportConfig, default_from_date};
use vapix_api::Scheme;

use crate::cli::{GlobalOpts, ReportOpts};
use crate::error::CliError;

// ── TOML config struct ───────────────────────────────────────────────

/// Settings read from `config.toml`. Every key is optional; flags and
/// environment variables take precedence over each of them.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FileConfig {
    pub address: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub httpmethod: Option<String>,
    pub from_date: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

// ── Loading ──────────────────────────────────────────────────────────

/// Default config file location: `<config dir>/doorlog/config.toml`.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "doorlog", "doorlog").map_or_else(
        || {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home)
                .join(".config")
                .join("doorlog")
                .join("config.toml")
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Load the config file. A missing file at the default location is an
/// empty config; a missing file the user named explicitly is an error.
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig, CliError> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(CliError::NoConfig {
                path: path.display().to_string(),
            });
        }
        Some(path) => path.to_path_buf(),
        None => config_path(),
    };

    tracing::debug!(path = %path.display(), "loading config file");

    let config: FileConfig = Figment::from(Serialized::defaults(FileConfig::default()))
        .merge(Toml::file(&path))
        .extract()?;
    Ok(config)
}

// ── Resolution ───────────────────────────────────────────────────────

/// Merge flags/env over the config file into a `ReportConfig`.
///
/// `today` supplies the default start date (midnight). Fails before any
/// network I/O when address, user or password is missing.
pub fn resolve(
    opts: &ReportOpts,
    global: &GlobalOpts,
    file: FileConfig,
    today: NaiveDate,
) -> Result<ReportConfig, CliError> {
    let FileConfig {
        address,
        user,
        password,
        httpmethod,
        from_date,
        timeout,
    } = file;

    let address = pick(opts.ip_address.as_ref(), address);
    let username = pick(opts.user.as_ref(), user);
    let password = pick(opts.password.as_ref(), password);

    let missing: Vec<&str> = [
        (address.is_none(), "address (--ipAddress / AxisAddress)"),
        (username.is_none(), "user (--user / AxisUser)"),
        (password.is_none(), "password (--password / AxisPassword)"),
    ]
    .into_iter()
    .filter_map(|(absent, name)| absent.then_some(name))
    .collect();

    let (Some(address), Some(username), Some(password)) = (address, username, password) else {
        return Err(CliError::MissingConfig {
            missing: missing.join(", "),
        });
    };

    let method = pick(opts.http_method.as_ref(), httpmethod);
    let from_date = match pick(opts.from_date.as_ref(), from_date) {
        Some(value) => normalize_from_date(&value)?,
        None => default_from_date(today),
    };
    let timeout = global
        .timeout
        .or(timeout)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    Ok(ReportConfig {
        address,
        username,
        password: SecretString::from(password),
        scheme: Scheme::from_method(method.as_deref()),
        from_date,
        timeout,
    })
}

/// Flag (or env) value if set and non-blank, otherwise the file value.
fn pick(flag: Option<&String>, file: Option<String>) -> Option<String> {
    let is_set = |value: &String| !value.trim().is_empty();
    flag.filter(|value| is_set(value))
        .cloned()
        .or_else(|| file.filter(is_set))
}

/// Accept `YYYY-MM-DDTHH:MM:SS` unchanged; expand a bare date to midnight.
fn normalize_from_date(value: &str) -> Result<String, CliError> {
    let value = value.trim();

    if NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok() {
        return Ok(value.to_owned());
    }
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(default_from_date(day));
    }

    Err(CliError::Validation {
        field: "fromDate".into(),
        reason: format!("'{value}' is not YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD"),
    })
}
