// VAPIX HTTP client
//
// Wraps `reqwest::Client` with device URL construction, the digest
// challenge/response round trip, and status/body decoding. Endpoint
// groups (doorcontrol, pacs, eventlogger) are implemented as inherent
// methods in separate files to keep this module focused on transport.

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::transport::{Scheme, TransportConfig};

/// Raw HTTP client for a single Axis device.
///
/// Every VAPIX call is a JSON `POST`. Requests are first sent without
/// credentials; a `401` carrying a Digest challenge is answered once and
/// the request replayed. Any final status other than `200` surfaces as
/// [`Error::Rejected`].
pub struct VapixClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl VapixClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// The `base_url` should be the device root (e.g. `https://10.0.0.20/`).
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url, credentials))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// Device root URL for an address (`host` or `host:port`).
    pub fn device_url(scheme: Scheme, address: &str) -> Result<Url, Error> {
        let address = address.trim().trim_end_matches('/');
        Ok(Url::parse(&format!("{scheme}://{address}/"))?)
    }

    /// The device base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// POST a JSON body to `path` and decode a `200` reply into `T`.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let url = self.base_url.join(path)?;
        let payload = serde_json::to_vec(body).map_err(Error::Encode)?;

        debug!(device = %self.base_url(), "POST {}", url.path());
        let resp = self.send(url.clone(), payload.clone(), None).await?;

        if resp.status() != StatusCode::UNAUTHORIZED {
            return parse_reply(resp).await;
        }

        let challenge = resp
            .headers()
            .get(WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| Credentials::is_digest_challenge(v))
            .map(String::from);

        // Without a digest challenge there is nothing to answer; the 401
        // stands as the final reply.
        let Some(challenge) = challenge else {
            return parse_reply(resp).await;
        };

        trace!("answering digest challenge");
        let authorization =
            self.credentials
                .digest_authorization(&challenge, url.path(), &payload)?;
        let resp = self.send(url, payload, Some(authorization)).await?;

        parse_reply(resp).await
    }

    async fn send(
        &self,
        url: Url,
        payload: Vec<u8>,
        authorization: Option<String>,
    ) -> Result<reqwest::Response, Error> {
        let mut builder = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);

        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }

        builder.send().await.map_err(Error::Transport)
    }
}

/// Decode a final reply: `200` → `T`, anything else → `Error::Rejected`.
async fn parse_reply<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();

    if status != StatusCode::OK {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Rejected {
            status: status.as_u16(),
            message: preview(&body),
        });
    }

    let body = resp.text().await.map_err(Error::Transport)?;

    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: format!("{e} (body preview: {:?})", preview(&body)),
        body,
    })
}

fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}
