// HTTP Digest authentication
//
// VAPIX endpoints answer an unauthenticated request with `401` and a
// `WWW-Authenticate: Digest ...` challenge. The client answers the
// challenge and replays the same body with an `Authorization` header.

use digest_auth::AuthContext;
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Username and password for a device account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Whether a `WWW-Authenticate` value offers the Digest scheme.
    pub fn is_digest_challenge(header: &str) -> bool {
        header
            .trim_start()
            .get(..6)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("digest"))
    }

    /// Build the `Authorization` header answering a digest challenge for a
    /// `POST` of `body` to `uri`.
    pub fn digest_authorization(
        &self,
        challenge: &str,
        uri: &str,
        body: &[u8],
    ) -> Result<String, Error> {
        let mut prompt = digest_auth::parse(challenge).map_err(|e| Error::Authentication {
            message: format!("unusable digest challenge: {e}"),
        })?;

        let context = AuthContext::new_post(
            self.username.as_str(),
            self.password.expose_secret(),
            uri,
            Some(body),
        );

        let answer = prompt.respond(&context).map_err(|e| Error::Authentication {
            message: format!("cannot answer digest challenge: {e}"),
        })?;

        Ok(answer.to_header_string())
    }
}
