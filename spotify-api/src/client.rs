//! HTTP client for the Spotify Web API.
//!
//! Every data call is the same linear sequence:
//!
//! 1. Request a fresh bearer token ([`SpotifyClient::authenticate`])
//! 2. Interpolate the resource id into the catalog template
//! 3. `GET` with `Authorization: Bearer <token>` (plus query parameters, if any)
//! 4. Decode the body with the catalog's [`ResponseFormat`](crate::endpoints::ResponseFormat)
//!
//! Nothing is cached or retried; the client holds no mutable state, so a
//! shared `&SpotifyClient` is safe to use from several threads.
//!
//! # Error responses
//!
//! Non-2xx responses carry this envelope and are mapped to
//! [`SpotifyError::Api`](crate::SpotifyError::Api):
//!
//! ```json
//! { "error": { "status": 404, "message": "Non existing id" } }
//! ```

use crate::auth::Credentials;
use crate::endpoints::{Endpoints, Resource};
use crate::error::{Result, SpotifyError};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;

const USER_AGENT: &str = concat!("spotify-api/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the Spotify Web API.
///
/// Holds a [`reqwest::blocking::Client`], the application [`Credentials`] and
/// the [`Endpoints`] catalog. API methods are implemented in separate modules
/// (`album`, `track`, `artist`, `playlist`) as `impl SpotifyClient` blocks.
pub struct SpotifyClient {
    http: Client,
    credentials: Credentials,
    endpoints: Endpoints,
}

impl SpotifyClient {
    /// Create a client for the public Spotify service with JSON responses.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_endpoints(credentials, Endpoints::default())
    }

    /// Create a client for the given response format name.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::UnsupportedFormat`] for anything but `json`.
    pub fn with_format(credentials: Credentials, format: &str) -> Result<Self> {
        Self::with_endpoints(credentials, Endpoints::new(format)?)
    }

    /// Create a client with an explicit [`Endpoints`] catalog (useful for
    /// testing against a local server).
    pub fn with_endpoints(credentials: Credentials, endpoints: Endpoints) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            credentials,
            endpoints,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Authenticate, then `GET` `resource` for `id` and decode the body.
    ///
    /// Returns [`SpotifyError::Api`] for a non-2xx status.
    pub fn request(&self, resource: Resource, id: &str, query: &[(&str, &str)]) -> Result<Value> {
        let token = self.authenticate()?;
        let url = self.endpoints.url(resource, id);
        debug!(%resource, url = %url, "GET");

        let mut req = self
            .http
            .get(&url)
            .header(AUTHORIZATION, token.bearer_header())
            .header(CONTENT_TYPE, "json");
        if !query.is_empty() {
            req = req.query(query);
        }

        let resp = req.send()?;
        let status = resp.status();
        let body = resp.text()?;
        debug!(%resource, status = status.as_u16(), bytes = body.len(), "response");

        if !status.is_success() {
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }
        self.endpoints.format().decode(&body)
    }
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.to_owned())
}
