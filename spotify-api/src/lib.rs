//! Spotify Web API client library.
//!
//! Provides typed, blocking access to the Spotify Web API catalog endpoints
//! (albums, tracks, artists, playlists) using the OAuth2 client credentials
//! flow.
//!
//! # Authentication
//!
//! Every call first exchanges the application's client id and secret for a
//! fresh bearer token; tokens are never cached. Credentials are passed in
//! explicitly or loaded from the environment / `~/.config/spotify-api/credentials.json`.
//!
//! ```no_run
//! use spotify_api::{Credentials, SpotifyClient};
//!
//! let client = SpotifyClient::new(Credentials::new("CLIENT_ID", "CLIENT_SECRET")).unwrap();
//! let track = client.get_track("6mFkJmJqdDVQ1REhVfGgd1").unwrap();
//! println!("{track}");
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                                       | Endpoint                         | Returns            |
//! |----------------------------------------------|----------------------------------|--------------------|
//! | [`SpotifyClient::get_album`]                 | `/albums/{id}`                   | [`Album`]          |
//! | [`SpotifyClient::get_album_tracks`]          | `/albums/{id}/tracks`            | [`AlbumTrack`]s    |
//! | [`SpotifyClient::get_track`]                 | `/tracks/{id}`                   | [`Track`]          |
//! | [`SpotifyClient::get_track_audio_features`]  | `/audio-features/{id}`           | [`AudioFeatures`]  |
//! | [`SpotifyClient::get_artist`]                | `/artists/{id}`                  | [`Artist`]         |
//! | [`SpotifyClient::get_artist_albums`]         | `/artists/{id}/albums`           | [`Album`]s         |
//! | [`SpotifyClient::get_artist_top_tracks`]     | `/artists/{id}/top-tracks`       | [`Track`]s         |
//! | [`SpotifyClient::get_artist_related`]        | `/artists/{id}/related-artists`  | [`Artist`]s        |
//! | [`SpotifyClient::get_playlist`]              | `/playlists/{id}`                | [`Playlist`]       |
//! | [`SpotifyClient::get_user_playlists`]        | `/users/{id}/playlists`          | [`Playlist`]s      |
//!
//! List endpoints return their first page only.

mod album;
mod artist;
pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
mod parse;
mod playlist;
mod track;
pub mod types;

pub use artist::DEFAULT_COUNTRY;
pub use auth::{AccessToken, Credentials};
pub use client::SpotifyClient;
pub use endpoints::{Endpoints, Resource, ResponseFormat};
pub use error::{Result, SpotifyError};
pub use types::{Album, AlbumTrack, Artist, AudioFeatures, Playlist, Track};
