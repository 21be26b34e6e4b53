//! Client credentials and bearer-token acquisition.
//!
//! Credentials are resolved from `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET`
//! or from `~/.config/spotify-api/credentials.json`:
//!
//! ```json
//! { "client_id": "f38f00...", "client_secret": "9f4c31..." }
//! ```
//!
//! # Token endpoint
//!
//! `POST https://accounts.spotify.com/api/token`
//!
//! Headers: `Authorization: Basic base64(client_id:client_secret)`,
//! body: `grant_type=client_credentials` (form-encoded).
//!
//! Response:
//! ```json
//! { "access_token": "BQDk...", "token_type": "Bearer", "expires_in": 3600 }
//! ```
//!
//! Rejected credentials come back as HTTP 400 with
//! `{"error": "invalid_client", "error_description": "Invalid client"}`.

use crate::client::SpotifyClient;
use crate::error::{Result, SpotifyError};
use base64::{Engine, engine::general_purpose::STANDARD as B64};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";

/// Application credentials for the client credentials flow.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read credentials from `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`.
    ///
    /// Returns `None` unless both are set and non-empty.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var(ENV_CLIENT_ID).ok(),
            std::env::var(ENV_CLIENT_SECRET).ok(),
        )
    }

    fn from_vars(id: Option<String>, secret: Option<String>) -> Option<Self> {
        let id = id.filter(|s| !s.is_empty())?;
        let secret = secret.filter(|s| !s.is_empty())?;
        Some(Self::new(id, secret))
    }

    /// Resolve credentials from the environment, then the config file.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::NotConfigured`] if neither source has them.
    pub fn load() -> Result<Self> {
        match Self::from_env() {
            Some(creds) => Ok(creds),
            None => Self::load_from(&Self::path()?),
        }
    }

    /// Save credentials to disk, creating parent directories if needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Delete the credentials file from disk.
    pub fn clear() -> Result<()> {
        Self::clear_at(&Self::path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SpotifyError::NotConfigured);
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    fn clear_at(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// `Authorization` header value for the token request.
    pub(crate) fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", B64.encode(raw))
    }

    fn path() -> Result<PathBuf> {
        let config = dirs::config_dir()
            .ok_or_else(|| SpotifyError::Other("cannot determine config directory".into()))?;
        Ok(config.join("spotify-api").join("credentials.json"))
    }
}

/// A bearer token issued by the token endpoint.
///
/// Short-lived (`expires_in` seconds, usually 3600). The client never keeps
/// one around: each data call requests its own.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    access_token: String,
    token_type: String,
    expires_in: u64,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

impl AccessToken {
    /// Read a token response body. `None` if `access_token` is not a string.
    ///
    /// A missing, null or mistyped `token_type` means `Bearer`, and the same
    /// for `expires_in` means 0.
    fn from_json(json: &Value) -> Option<Self> {
        let access_token = json.get("access_token")?.as_str()?.to_owned();
        let token_type = json
            .get("token_type")
            .and_then(Value::as_str)
            .unwrap_or("Bearer")
            .to_owned();
        let expires_in = json.get("expires_in").and_then(Value::as_u64).unwrap_or(0);
        Some(Self {
            access_token,
            token_type,
            expires_in,
        })
    }

    /// The raw token string.
    pub fn as_str(&self) -> &str {
        &self.access_token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Lifetime in seconds as reported at issue time.
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// `Authorization` header value for resource requests.
    pub(crate) fn bearer_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl SpotifyClient {
    /// Request a fresh access token with the client credentials grant.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Http`] — network failure
    /// - [`SpotifyError::Auth`] — non-2xx status, or no `access_token` in the body
    /// - [`SpotifyError::Json`] — a 2xx body that is not JSON
    pub fn authenticate(&self) -> Result<AccessToken> {
        let url = self.endpoints().auth_url();
        debug!(url, client_id = self.credentials().client_id(), "requesting access token");

        let resp = self
            .http()
            .post(url)
            .header(AUTHORIZATION, self.credentials().basic_auth_header())
            .form(&[("grant_type", "client_credentials")])
            .send()?;
        let status = resp.status();
        let body = resp.text()?;
        debug!(status = status.as_u16(), "token response");

        if !status.is_success() {
            return Err(SpotifyError::Auth {
                status: status.as_u16(),
                message: auth_error_message(&body),
            });
        }

        let json = self.endpoints().format().decode(&body)?;
        AccessToken::from_json(&json).ok_or_else(|| SpotifyError::Auth {
            status: status.as_u16(),
            message: "response has no access_token".into(),
        })
    }
}

fn auth_error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return body.to_owned();
    };
    json.get("error_description")
        .or_else(|| json.get("error"))
        .and_then(Value::as_str)
        .map_or_else(|| body.to_owned(), String::from)
}
