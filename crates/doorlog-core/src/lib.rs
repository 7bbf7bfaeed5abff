//! Access-event reporting on top of `vapix-api`.
//!
//! - **[`ReportConfig`]**: resolved, immutable run configuration. Built by
//!   the CLI and handed in; this crate never reads files or the environment.
//!
//! - **[`DoorLog`]**: facade over a [`vapix_api::VapixClient`]. Loads the
//!   three reference lists concurrently into [`ReferenceData`] and fetches
//!   granted/denied events since the configured start date.
//!
//! - **[`Directory`]**: token → name lookup that degrades to
//!   [`PLACEHOLDER`] on a miss instead of failing.
//!
//! - **[`ReportLine`]**: one joined event, rendered via `Display` in the
//!   fixed-width short (unknown credential) or long form.

pub mod config;
pub mod directory;
pub mod doorlog;
pub mod error;
pub mod report;

pub use config::{ReportConfig, default_from_date};
pub use directory::{Directory, PLACEHOLDER, ReferenceData};
pub use doorlog::DoorLog;
pub use error::CoreError;
pub use report::{EventAttributes, ReportLine, lines};
