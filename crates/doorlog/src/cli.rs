//! Clap derive structures for the `doorlog` CLI.
//!
//! The report flags keep the camelCase spellings and environment variable
//! names that existing door-controller scripts already use. Only clap and
//! clap_complete may be referenced here; build.rs compiles this file on
//! its own to render man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// doorlog -- access event report for Axis door controllers
#[derive(Debug, Parser)]
#[command(
    name = "doorlog",
    version,
    about = "Print granted and denied door access events from an Axis door controller",
    long_about = "Print granted and denied door access events from an Axis door controller.\n\n\
        Users, doors and access points are fetched first so that tokens in the \
        event log can be shown as names. Events are printed newest first, one \
        fixed-width line each.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(flatten)]
    pub report: ReportOpts,

    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Option<Command>,
}

// ── Report Options ───────────────────────────────────────────────────

/// Device and time window. Each flag falls back to its environment
/// variable, then to the config file.
#[derive(Debug, Default, Args)]
pub struct ReportOpts {
    /// Start of the report window, device-local (YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD)
    ///
    /// Defaults to midnight today.
    #[arg(long = "fromDate", value_name = "DATETIME")]
    pub from_date: Option<String>,

    /// Controller address, host or host:port
    #[arg(long = "ipAddress", env = "AxisAddress", value_name = "HOST")]
    pub ip_address: Option<String>,

    /// Device account username
    #[arg(long, env = "AxisUser", value_name = "NAME")]
    pub user: Option<String>,

    /// Device account password
    #[arg(long, env = "AxisPassword", hide_env_values = true, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Transport to use: HTTP selects plain HTTP, anything else HTTPS
    #[arg(long = "httpmethod", env = "axisHttpMethod", value_name = "METHOD")]
    pub http_method: Option<String>,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Default, Args)]
pub struct GlobalOpts {
    /// Config file path [default: platform config dir]/doorlog/config.toml
    #[arg(long, env = "DOORLOG_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "DOORLOG_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ── Subcommands ──────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
