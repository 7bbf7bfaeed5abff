// PACS endpoints
//
// Users and access points share `POST /vapix/pacs`; the action key in the
// body selects the list.

use serde_json::json;
use tracing::debug;

use crate::client::VapixClient;
use crate::error::Error;
use crate::models::{AccessPoint, AccessPointList, User, UserList};

const PACS_PATH: &str = "/vapix/pacs";

impl VapixClient {
    /// List credential holders.
    ///
    /// `POST /vapix/pacs` with `{"axudb:GetUserList": {}}`
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        debug!("listing users");
        let list: UserList = self
            .post(PACS_PATH, &json!({ "axudb:GetUserList": {} }))
            .await?;
        Ok(list.users)
    }

    /// List access points and the door entity each one controls.
    ///
    /// `POST /vapix/pacs` with `{"pacsaxis:GetAccessPointList": {}}`
    pub async fn list_access_points(&self) -> Result<Vec<AccessPoint>, Error> {
        debug!("listing access points");
        let list: AccessPointList = self
            .post(PACS_PATH, &json!({ "pacsaxis:GetAccessPointList": {} }))
            .await?;
        Ok(list.access_points)
    }
}
