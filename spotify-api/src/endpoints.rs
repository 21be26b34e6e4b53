//! Endpoint catalog — base URL, token URL, and per-resource path templates.
//!
//! Every template carries exactly one `{id}` placeholder and is relative to
//! the API base URL:
//!
//! | Resource             | Template                     |
//! |----------------------|------------------------------|
//! | `album`              | `albums/{id}`                |
//! | `album-tracks`       | `albums/{id}/tracks`         |
//! | `track`              | `tracks/{id}`                |
//! | `track-audio-features` | `audio-features/{id}`      |
//! | `artist`             | `artists/{id}`               |
//! | `artist-albums`      | `artists/{id}/albums`        |
//! | `artist-top-tracks`  | `artists/{id}/top-tracks`    |
//! | `artist-related`     | `artists/{id}/related-artists` |
//! | `playlist`           | `playlists/{id}`             |
//! | `user-playlists`     | `users/{id}/playlists`       |

use crate::error::{Result, SpotifyError};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Default base URL of the Spotify Web API.
pub const API_BASE_URL: &str = "https://api.spotify.com/v1/";
/// Default URL of the client-credentials token endpoint.
pub const AUTH_URL: &str = "https://accounts.spotify.com/api/token";

const ID: &str = "{id}";

/// Logical resource addressed by a single id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Album,
    AlbumTracks,
    Track,
    TrackAudioFeatures,
    Artist,
    ArtistAlbums,
    ArtistTopTracks,
    ArtistRelated,
    Playlist,
    UserPlaylists,
}

impl Resource {
    /// Every resource, in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Album,
        Self::AlbumTracks,
        Self::Track,
        Self::TrackAudioFeatures,
        Self::Artist,
        Self::ArtistAlbums,
        Self::ArtistTopTracks,
        Self::ArtistRelated,
        Self::Playlist,
        Self::UserPlaylists,
    ];

    /// Path template relative to the API base URL.
    pub fn template(self) -> &'static str {
        match self {
            Self::Album => "albums/{id}",
            Self::AlbumTracks => "albums/{id}/tracks",
            Self::Track => "tracks/{id}",
            Self::TrackAudioFeatures => "audio-features/{id}",
            Self::Artist => "artists/{id}",
            Self::ArtistAlbums => "artists/{id}/albums",
            Self::ArtistTopTracks => "artists/{id}/top-tracks",
            Self::ArtistRelated => "artists/{id}/related-artists",
            Self::Playlist => "playlists/{id}",
            Self::UserPlaylists => "users/{id}/playlists",
        }
    }

    /// Logical name, e.g. `artist-top-tracks`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::AlbumTracks => "album-tracks",
            Self::Track => "track",
            Self::TrackAudioFeatures => "track-audio-features",
            Self::Artist => "artist",
            Self::ArtistAlbums => "artist-albums",
            Self::ArtistTopTracks => "artist-top-tracks",
            Self::ArtistRelated => "artist-related",
            Self::Playlist => "playlist",
            Self::UserPlaylists => "user-playlists",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = SpotifyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| SpotifyError::Other(format!("unknown resource: {s}")))
    }
}

/// Response format, resolved once when the catalog is built.
///
/// Only JSON is served by the Web API; anything else is rejected up front
/// instead of producing empty results later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
}

impl ResponseFormat {
    /// Decode a response body.
    pub fn decode(self, body: &str) -> Result<Value> {
        match self {
            Self::Json => Ok(serde_json::from_str(body)?),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = SpotifyError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(SpotifyError::UnsupportedFormat(s.to_owned()))
        }
    }
}

/// URL catalog for one API deployment.
///
/// Immutable after construction. [`Endpoints::default`] targets the public
/// Spotify service; [`Endpoints::with_base`] points elsewhere (a proxy or a
/// mock server in tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    auth_url: String,
    format: ResponseFormat,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_base(API_BASE_URL, AUTH_URL, ResponseFormat::Json)
    }
}

impl Endpoints {
    /// Build the default catalog for the given format name.
    ///
    /// # Errors
    ///
    /// [`SpotifyError::UnsupportedFormat`] for anything but `json`.
    pub fn new(format: &str) -> Result<Self> {
        let format = format.parse()?;
        Ok(Self {
            format,
            ..Self::default()
        })
    }

    /// Build a catalog with custom base and token URLs.
    ///
    /// A trailing `/` is appended to `base_url` when missing.
    pub fn with_base(
        base_url: impl Into<String>,
        auth_url: impl Into<String>,
        format: ResponseFormat,
    ) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            base_url,
            auth_url: auth_url.into(),
            format,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_url(&self) -> &str {
        &self.auth_url
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    /// Absolute URL template for `resource`, still containing `{id}`.
    pub fn template(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.template())
    }

    /// Absolute URL for `resource` with `{id}` replaced by `id` verbatim.
    pub fn url(&self, resource: Resource, id: &str) -> String {
        self.template(resource).replace(ID, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_base_plus_template() {
        let endpoints = Endpoints::default();
        for resource in Resource::ALL {
            let url = endpoints.url(resource, "4aawyAB9vmqN3uQ7FjRGTy");
            assert!(url.starts_with("https://api.spotify.com/v1/"), "{url}");
            assert_eq!(
                url,
                format!("{API_BASE_URL}{}", resource.template())
                    .replace("{id}", "4aawyAB9vmqN3uQ7FjRGTy")
            );
            assert!(!url.contains("{id}"));
        }
    }

    #[test]
    fn every_template_has_one_placeholder() {
        for resource in Resource::ALL {
            assert_eq!(resource.template().matches(ID).count(), 1, "{resource}");
        }
    }

    #[test]
    fn artist_relations_are_not_nested_under_albums() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.url(Resource::ArtistTopTracks, "A1"),
            "https://api.spotify.com/v1/artists/A1/top-tracks"
        );
        assert_eq!(
            endpoints.url(Resource::ArtistRelated, "A1"),
            "https://api.spotify.com/v1/artists/A1/related-artists"
        );
    }

    #[test]
    fn template_keeps_placeholder() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.template(Resource::AlbumTracks),
            "https://api.spotify.com/v1/albums/{id}/tracks"
        );
        assert_eq!(endpoints.auth_url(), AUTH_URL);
        assert_eq!(endpoints.base_url(), API_BASE_URL);
    }

    #[test]
    fn resource_from_logical_name() {
        assert_eq!(
            "track-audio-features".parse::<Resource>().unwrap(),
            Resource::TrackAudioFeatures
        );
        assert_eq!("artist-related".parse::<Resource>().unwrap(), Resource::ArtistRelated);
        assert!("albums".parse::<Resource>().is_err());
    }

    #[test]
    fn unsupported_format_fails_fast() {
        assert!(Endpoints::new("json").is_ok());
        assert!(Endpoints::new("JSON").is_ok());
        match Endpoints::new("xml") {
            Err(SpotifyError::UnsupportedFormat(f)) => assert_eq!(f, "xml"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn custom_base_gets_trailing_slash() {
        let endpoints = Endpoints::with_base(
            "http://127.0.0.1:1234/v1",
            "http://127.0.0.1:1234/api/token",
            ResponseFormat::Json,
        );
        assert_eq!(endpoints.url(Resource::Track, "T1"), "http://127.0.0.1:1234/v1/tracks/T1");
    }

    #[test]
    fn json_decode_rejects_garbage() {
        assert!(matches!(
            ResponseFormat::Json.decode("<html>"),
            Err(SpotifyError::Json(_))
        ));
        assert_eq!(ResponseFormat::Json.decode(r#"{"a":1}"#).unwrap()["a"], 1);
    }
}
