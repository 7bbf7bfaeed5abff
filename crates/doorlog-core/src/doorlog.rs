// ── DoorLog facade ──
//
// Owns the device client for a single report run. Reference lists are
// fetched concurrently and a list the device refuses (non-200) becomes an
// empty directory, so its names render as the placeholder. The event
// fetch has no such fallback.

use tracing::{debug, warn};
use vapix_api::{Event, FetchEventsRequest, VapixClient};

use crate::config::ReportConfig;
use crate::directory::{Directory, PLACEHOLDER, ReferenceData};
use crate::error::CoreError;

pub struct DoorLog {
    client: VapixClient,
    from_date: String,
}

impl DoorLog {
    /// Build the device client for `config`. Performs no I/O.
    pub fn new(config: &ReportConfig) -> Result<Self, CoreError> {
        let client = VapixClient::new(
            config.device_url()?,
            config.credentials(),
            &config.transport(),
        )?;
        Ok(Self::with_client(client, config.from_date.clone()))
    }

    /// Use an already-built client.
    pub fn with_client(client: VapixClient, from_date: impl Into<String>) -> Self {
        Self {
            client,
            from_date: from_date.into(),
        }
    }

    pub fn from_date(&self) -> &str {
        &self.from_date
    }

    /// Fetch users, doors and access points.
    ///
    /// A list answered with a non-200 status degrades to an empty
    /// [`Directory`]. Transport and decoding failures are returned.
    pub async fn load_reference_data(&self) -> Result<ReferenceData, CoreError> {
        let (users, doors, access_points) = tokio::join!(
            self.client.list_users(),
            self.client.list_doors(),
            self.client.list_access_points(),
        );

        Ok(ReferenceData {
            users: degrade_rejected("user", users.map(Directory::from_users))?,
            doors: degrade_rejected("door", doors.map(Directory::from_doors))?,
            access_points: degrade_rejected(
                "access point",
                access_points.map(Directory::from_access_points),
            )?,
        })
    }

    /// Fetch granted and denied events since the start date, newest first.
    ///
    /// A non-200 reply is reported as [`CoreError::EventsRejected`].
    pub async fn fetch_events(&self) -> Result<Vec<Event>, CoreError> {
        let request = FetchEventsRequest::access_decisions(&self.from_date);
        debug!(from = %self.from_date, "fetching access decisions");

        match self.client.fetch_events(&request).await {
            Ok(events) => Ok(events),
            Err(vapix_api::Error::Rejected { status, message }) => {
                Err(CoreError::EventsRejected { status, message })
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn degrade_rejected(
    list: &'static str,
    result: Result<Directory, vapix_api::Error>,
) -> Result<Directory, CoreError> {
    match result {
        Ok(directory) => {
            debug!(list, entries = directory.len(), "reference list loaded");
            Ok(directory)
        }
        Err(err) => {
            let Some(status) = err.http_status() else {
                return Err(err.into());
            };
            warn!(
                list,
                status,
                "{list} list unavailable, names will show as {PLACEHOLDER}"
            );
            if err.is_unauthorized() {
                warn!("device refused the {list} list; check the account's access rights");
            }
            Ok(Directory::default())
        }
    }
}
