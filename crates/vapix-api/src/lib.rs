// vapix-api: Async Rust client for the Axis VAPIX access-control JSON APIs

pub mod auth;
pub mod client;
pub mod doorcontrol;
pub mod error;
pub mod eventlogger;
pub mod models;
pub mod pacs;
pub mod transport;

pub use auth::Credentials;
pub use client::VapixClient;
pub use error::Error;
pub use models::{
    AccessPoint, Door, Event, EventFilter, FetchEventsRequest, FilterSet, KeyValue, User,
};
pub use transport::{Scheme, TransportConfig};
