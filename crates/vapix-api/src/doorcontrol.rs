// Door control endpoints
//
// `POST /vapix/doorcontrol` with an `axtdc:` action key.

use serde_json::json;
use tracing::debug;

use crate::client::VapixClient;
use crate::error::Error;
use crate::models::{Door, DoorList};

const DOORCONTROL_PATH: &str = "/vapix/doorcontrol";

impl VapixClient {
    /// List every door configured on the controller.
    ///
    /// `POST /vapix/doorcontrol` with `{"axtdc:GetDoorList": {}}`
    pub async fn list_doors(&self) -> Result<Vec<Door>, Error> {
        debug!("listing doors");
        let list: DoorList = self
            .post(DOORCONTROL_PATH, &json!({ "axtdc:GetDoorList": {} }))
            .await?;
        Ok(list.doors)
    }
}
