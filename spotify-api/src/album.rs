//! Album APIs.
//!
//! # Endpoints
//!
//! ## `get_album` — `GET /v1/albums/{id}`
//!
//! Response (abridged):
//! ```json
//! {
//!   "id": "4LH4d3cOWNNsVw41Gqt2kv",
//!   "name": "The Dark Side of the Moon",
//!   "album_type": "album",
//!   "artists": [{ "id": "0k17h0D3J5VfsdmQ1iZtE9", "name": "Pink Floyd" }],
//!   "copyrights": [{ "text": "© 1973 Pink Floyd Music Ltd.", "type": "C" }],
//!   "label": "Parlophone UK",
//!   "popularity": 81,
//!   "release_date": "1973-03-01",
//!   "total_tracks": 10,
//!   "tracks": { "total": 10, "items": [ <simplified track>, ... ] }
//! }
//! ```
//!
//! ## `get_album_tracks` — `GET /v1/albums/{id}/tracks`
//!
//! A paging object of simplified tracks:
//! ```json
//! { "limit": 20, "offset": 0, "total": 10,
//!   "items": [{ "id": "...", "name": "Speak to Me", "artists": [...],
//!               "duration_ms": 67960, "explicit": false,
//!               "track_number": 1, "disc_number": 1 }] }
//! ```
//!
//! Only the first page is read.

use crate::client::SpotifyClient;
use crate::endpoints::Resource;
use crate::error::Result;
use crate::parse;
use crate::types::{Album, AlbumTrack};

impl SpotifyClient {
    /// Get album information by id.
    ///
    /// An album id can be found in the share link
    /// `https://open.spotify.com/album/{id}`. `tracks` holds the first page
    /// of the track listing.
    pub fn get_album(&self, album_id: &str) -> Result<Album> {
        let resp = self.request(Resource::Album, album_id, &[])?;
        parse::album(&resp)
    }

    /// Get the first page of an album's track listing.
    pub fn get_album_tracks(&self, album_id: &str) -> Result<Vec<AlbumTrack>> {
        let resp = self.request(Resource::AlbumTracks, album_id, &[])?;
        parse::page_items(&resp, parse::album_track)
    }
}
