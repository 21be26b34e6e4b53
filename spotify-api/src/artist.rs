//! Artist APIs: lookup, albums, top tracks, related artists.
//!
//! # Endpoints
//!
//! ## `get_artist` — `GET /v1/artists/{id}`
//!
//! Response (abridged):
//! ```json
//! { "id": "0k17h0D3J5VfsdmQ1iZtE9", "name": "Pink Floyd", "popularity": 78,
//!   "genres": ["art rock", "progressive rock"] }
//! ```
//!
//! ## `get_artist_albums` — `GET /v1/artists/{id}/albums`
//!
//! A paging object whose `items` are simplified albums (no label,
//! popularity, copyrights or tracks). Only the first page is returned.
//!
//! ## `get_artist_top_tracks` — `GET /v1/artists/{id}/top-tracks?country=US`
//!
//! `{ "tracks": [ <full track object>, ... ] }`
//!
//! ## `get_artist_related` — `GET /v1/artists/{id}/related-artists`
//!
//! `{ "artists": [ <artist object>, ... ] }`

use crate::client::SpotifyClient;
use crate::endpoints::Resource;
use crate::error::Result;
use crate::parse;
use crate::types::{Album, Artist, Track};

/// Market used by [`SpotifyClient::get_artist_top_tracks`] when none is given.
pub const DEFAULT_COUNTRY: &str = "US";

impl SpotifyClient {
    /// Get artist information by id.
    ///
    /// The returned [`Artist`] carries `artist_id` as passed in, not the `id`
    /// echoed in the response body.
    pub fn get_artist(&self, artist_id: &str) -> Result<Artist> {
        let resp = self.request(Resource::Artist, artist_id, &[])?;
        parse::artist(&resp, artist_id)
    }

    /// Get the first page of an artist's albums.
    pub fn get_artist_albums(&self, artist_id: &str) -> Result<Vec<Album>> {
        let resp = self.request(Resource::ArtistAlbums, artist_id, &[])?;
        parse::page_items(&resp, parse::album)
    }

    /// Get an artist's top tracks in a market (ISO 3166-1 alpha-2 code,
    /// [`DEFAULT_COUNTRY`] when `None`).
    pub fn get_artist_top_tracks(
        &self,
        artist_id: &str,
        country: Option<&str>,
    ) -> Result<Vec<Track>> {
        let country = country.unwrap_or(DEFAULT_COUNTRY);
        let resp = self.request(Resource::ArtistTopTracks, artist_id, &[("country", country)])?;
        parse::array(&resp, "tracks")?
            .iter()
            .map(parse::track_with_own_id)
            .collect()
    }

    /// Get artists similar to the given one.
    pub fn get_artist_related(&self, artist_id: &str) -> Result<Vec<Artist>> {
        let resp = self.request(Resource::ArtistRelated, artist_id, &[])?;
        parse::array(&resp, "artists")?
            .iter()
            .map(|a| parse::artist(a, &parse::str_field(a, "id")?))
            .collect()
    }
}
