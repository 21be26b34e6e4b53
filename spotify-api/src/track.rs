//! Track and audio-features APIs.
//!
//! # Endpoints
//!
//! ## `get_track` — `GET /v1/tracks/{id}`
//!
//! Response (abridged):
//! ```json
//! {
//!   "id": "6mFkJmJqdDVQ1REhVfGgd1",
//!   "name": "Breathe (In the Air)",
//!   "album": { "id": "4LH4d3cOWNNsVw41Gqt2kv", "name": "The Dark Side of the Moon",
//!              "release_date": "1973-03-01" },
//!   "artists": [{ "id": "0k17h0D3J5VfsdmQ1iZtE9", "name": "Pink Floyd" }],
//!   "duration_ms": 169534,
//!   "explicit": false,
//!   "popularity": 70
//! }
//! ```
//!
//! ## `get_track_audio_features` — `GET /v1/audio-features/{id}`
//!
//! Response:
//! ```json
//! {
//!   "id": "6mFkJmJqdDVQ1REhVfGgd1",
//!   "danceability": 0.35, "energy": 0.3, "key": 7, "loudness": -12.4, "mode": 1,
//!   "speechiness": 0.03, "acousticness": 0.21, "instrumentalness": 0.66,
//!   "liveness": 0.1, "valence": 0.17, "tempo": 135.3,
//!   "duration_ms": 169534, "time_signature": 4
//! }
//! ```

use crate::client::SpotifyClient;
use crate::endpoints::Resource;
use crate::error::Result;
use crate::parse;
use crate::types::{AudioFeatures, Track};

impl SpotifyClient {
    /// Get track metadata by id.
    ///
    /// A track id can be found in the share link
    /// `https://open.spotify.com/track/{id}`. The returned [`Track`] records
    /// `track_id` exactly as passed in.
    pub fn get_track(&self, track_id: &str) -> Result<Track> {
        let resp = self.request(Resource::Track, track_id, &[])?;
        parse::track(&resp, track_id)
    }

    /// Get the audio analysis scalars (tempo, key, energy, ...) for a track.
    pub fn get_track_audio_features(&self, track_id: &str) -> Result<AudioFeatures> {
        let resp = self.request(Resource::TrackAudioFeatures, track_id, &[])?;
        parse::audio_features(&resp, track_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing;
    use crate::error::SpotifyError;

    const BREATHE: &str = r#"{"name":"Breathe","album":{"name":"DSOTM","id":"A1","release_date":"1973-03-01"},"artists":[{"name":"Pink Floyd","id":"P1"}],"duration_ms":169000,"explicit":false,"popularity":70}"#;

    #[test]
    fn get_track_maps_every_field() {
        let mut server = mockito::Server::new();
        let _token = testing::token(&mut server).create();
        let _track = testing::get(&mut server, "/v1/tracks/T1", BREATHE).create();

        let track = testing::client(&server).get_track("T1").unwrap();
        assert_eq!(track.name, "Breathe");
        assert_eq!(track.album, "DSOTM");
        assert_eq!(track.album_id, "A1");
        assert_eq!(track.artists, vec!["Pink Floyd"]);
        assert_eq!(track.artists_id, vec!["P1"]);
        assert_eq!(track.duration_ms, 169_000);
        assert!(!track.explicit);
        assert_eq!(track.release_date, "1973-03-01");
        assert_eq!(track.popularity, 70);
        assert_eq!(track.track_id, "T1");
    }

    #[test]
    fn get_track_is_repeatable_and_authenticates_each_time() {
        let mut server = mockito::Server::new();
        let token = testing::token(&mut server).expect(2).create();
        let _track = testing::get(&mut server, "/v1/tracks/T1", BREATHE)
            .expect(2)
            .create();

        let client = testing::client(&server);
        let first = client.get_track("T1").unwrap();
        let second = client.get_track("T1").unwrap();
        assert_eq!(first, second);
        token.assert();
    }

    #[test]
    fn get_track_with_missing_field_is_a_shape_error() {
        let mut server = mockito::Server::new();
        let _token = testing::token(&mut server).create();
        let _track = testing::get(
            &mut server,
            "/v1/tracks/T1",
            r#"{"name":"Breathe","album":{"name":"DSOTM","id":"A1","release_date":"1973"},"artists":[],"explicit":false,"popularity":70}"#,
        )
        .create();

        match testing::client(&server).get_track("T1") {
            Err(SpotifyError::Shape { field, .. }) => assert_eq!(field, "duration_ms"),
            other => panic!("expected Shape, got {other:?}"),
        }
    }

    #[test]
    fn get_track_audio_features_maps_scalars() {
        let mut server = mockito::Server::new();
        let _token = testing::token(&mut server).create();
        let _features = testing::get(
            &mut server,
            "/v1/audio-features/T1",
            r#"{"id":"T1","danceability":0.35,"energy":0.3,"key":7,"loudness":-12.4,"mode":1,
                "speechiness":0.03,"acousticness":0.21,"instrumentalness":0.66,"liveness":0.1,
                "valence":0.17,"tempo":135.3,"duration_ms":169534,"time_signature":4}"#,
        )
        .create();

        let f = testing::client(&server).get_track_audio_features("T1").unwrap();
        assert_eq!(f.track_id, "T1");
        assert_eq!(f.key, 7);
        assert_eq!(f.mode, 1);
        assert_eq!(f.time_signature, 4);
        assert!((f.tempo - 135.3).abs() < 1e-9);
        assert!((f.loudness + 12.4).abs() < 1e-9);
    }
}
