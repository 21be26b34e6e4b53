//! Playlist APIs.
//!
//! ## `get_playlist` — `GET /v1/playlists/{id}`
//!
//! Response (abridged):
//! ```json
//! {
//!   "id": "37i9dQZF1DXcBWIGoYBM5M",
//!   "name": "Today's Top Hits",
//!   "description": "...",
//!   "public": true,
//!   "owner": { "id": "spotify", "display_name": "Spotify" },
//!   "tracks": {
//!     "total": 50,
//!     "items": [{ "added_at": "...", "track": <full track object or null> }]
//!   }
//! }
//! ```
//!
//! Items whose `track` is `null`, or a local file without an `id`, are skipped.
//!
//! ## `get_user_playlists` — `GET /v1/users/{id}/playlists`
//!
//! A paging object of simplified playlists; their `tracks` is only
//! `{ "href": "...", "total": 50 }`, so [`Playlist::tracks`](crate::types::Playlist::tracks)
//! stays `None`.

use crate::client::SpotifyClient;
use crate::endpoints::Resource;
use crate::error::Result;
use crate::parse;
use crate::types::Playlist;

impl SpotifyClient {
    /// Get a playlist with the first page of its tracks.
    pub fn get_playlist(&self, playlist_id: &str) -> Result<Playlist> {
        let resp = self.request(Resource::Playlist, playlist_id, &[])?;
        parse::playlist(&resp, true)
    }

    /// Get the first page of a user's public playlists (without tracks).
    pub fn get_user_playlists(&self, user_id: &str) -> Result<Vec<Playlist>> {
        let resp = self.request(Resource::UserPlaylists, user_id, &[])?;
        parse::page_items(&resp, |p| parse::playlist(p, false))
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing;

    #[test]
    fn get_playlist_maps_tracks() {
        let mut server = mockito::Server::new();
        let _token = testing::token(&mut server).create();
        let _playlist = testing::get(
            &mut server,
            "/v1/playlists/PL1",
            r#"{"id":"PL1","name":"Floyd","description":"best of","public":false,
                "owner":{"id":"kingboomie","display_name":"King Boomie"},
                "tracks":{"total":2,"items":[
                    {"track":{"id":"T1","name":"Breathe","album":{"name":"DSOTM","id":"A1","release_date":"1973-03-01"},
                              "artists":[{"name":"Pink Floyd","id":"P1"}],"duration_ms":169000,"explicit":false,"popularity":70}},
                    {"track":null}
                ]}}"#,
        )
        .create();

        let p = testing::client(&server).get_playlist("PL1").unwrap();
        assert_eq!(p.playlist_id, "PL1");
        assert_eq!(p.owner, "King Boomie");
        assert_eq!(p.description.as_deref(), Some("best of"));
        assert_eq!(p.public, Some(false));
        assert_eq!(p.total_tracks, 2);
        let tracks = p.tracks.unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].track_id, "T1");
    }

    #[test]
    fn get_user_playlists_leaves_tracks_empty() {
        let mut server = mockito::Server::new();
        let _token = testing::token(&mut server).create();
        let _playlists = testing::get(
            &mut server,
            "/v1/users/kingboomie/playlists",
            r#"{"limit":20,"offset":0,"total":2,"items":[
                {"id":"PL1","name":"Floyd","description":null,"public":true,
                 "owner":{"id":"kingboomie","display_name":"King Boomie"},"tracks":{"href":"...","total":12}},
                {"id":"PL2","name":"Road trip","public":true,
                 "owner":{"id":"kingboomie"},"tracks":{"href":"...","total":40}}
            ]}"#,
        )
        .create();

        let lists = testing::client(&server).get_user_playlists("kingboomie").unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].tracks, None);
        assert_eq!(lists[0].total_tracks, 12);
        assert_eq!(lists[1].owner, "kingboomie");
    }
}
