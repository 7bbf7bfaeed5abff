// Event logger endpoints

use tracing::debug;

use crate::client::VapixClient;
use crate::error::Error;
use crate::models::{Event, EventList, FetchEventsRequest};

const EVENTLOGGER_PATH: &str = "/vapix/eventlogger";

impl VapixClient {
    /// Fetch logged events matching `request`, in the order the device
    /// returns them.
    ///
    /// `POST /vapix/eventlogger` with `{"axlog:FetchEvents3": {...}}`
    pub async fn fetch_events(&self, request: &FetchEventsRequest) -> Result<Vec<Event>, Error> {
        debug!(
            filter_sets = request.fetch.filter_sets.len(),
            "fetching events"
        );
        let list: EventList = self.post(EVENTLOGGER_PATH, request).await?;
        debug!(count = list.events.len(), "events received");
        Ok(list.events)
    }
}
