//! Data types for Spotify Web API responses.
//!
//! These are plain records built from the decoded JSON by the client
//! operations; they are never mutated afterwards. Field names follow the
//! Web API where it is unambiguous, with `*_id` suffixes for ids.
//!
//! Every type renders as `[field=value, ...]` through [`Display`](fmt::Display).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A track, from the full track object.
///
/// Returned by [`SpotifyClient::get_track`](crate::SpotifyClient::get_track),
/// [`SpotifyClient::get_artist_top_tracks`](crate::SpotifyClient::get_artist_top_tracks)
/// and inside a [`Playlist`].
///
/// API JSON fields: `name`, `album` (`name`, `id`, `release_date`),
/// `artists` (`name`, `id`), `duration_ms`, `explicit`, `popularity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title.
    pub name: String,
    /// Album name.
    pub album: String,
    /// Album id.
    pub album_id: String,
    /// Performing artist names, in credit order.
    pub artists: Vec<String>,
    /// Artist ids, parallel to `artists`.
    pub artists_id: Vec<String>,
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Explicit lyrics flag.
    pub explicit: bool,
    /// Album release date (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
    pub release_date: String,
    /// Popularity, 0–100.
    pub popularity: u8,
    /// Track id.
    pub track_id: String,
}

/// A simplified track as listed inside an album.
///
/// Album listings carry no album or popularity data, so these are kept
/// apart from [`Track`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumTrack {
    pub track_id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub artists_id: Vec<String>,
    pub duration_ms: u64,
    pub explicit: bool,
    /// 1-based position on its disc.
    pub track_number: u32,
    pub disc_number: u32,
}

/// An artist.
///
/// API JSON fields: `id`, `name`, `popularity`, `genres` (string array).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Artist id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Popularity, 0–100.
    pub popularity: u8,
    /// Genre names; often empty.
    pub genres: Vec<String>,
}

/// An album.
///
/// Returned by [`SpotifyClient::get_album`](crate::SpotifyClient::get_album)
/// (full object) and [`SpotifyClient::get_artist_albums`](crate::SpotifyClient::get_artist_albums)
/// (simplified objects, where the `Option` fields are `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Album title.
    pub name: String,
    /// `album`, `single` or `compilation`.
    pub album_type: String,
    /// Album artist names.
    pub artists: Vec<String>,
    /// Album id.
    pub album_id: String,
    /// Copyright statements (only in the full album object).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyrights: Option<Vec<String>>,
    /// Record label (only in the full album object).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Popularity, 0–100 (only in the full album object).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u8>,
    /// Release date (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
    pub release_date: String,
    /// Total number of tracks on the album.
    pub total_tracks: u32,
    /// First page of the track listing (only in the full album object).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<AlbumTrack>>,
}

/// Audio analysis scalars for one track.
///
/// Returned by [`SpotifyClient::get_track_audio_features`](crate::SpotifyClient::get_track_audio_features).
/// The unit-interval fields (`danceability`, `energy`, ...) range 0.0–1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub track_id: String,
    pub danceability: f64,
    pub energy: f64,
    /// Pitch class (0 = C, 1 = C♯/D♭, ...), -1 if undetected.
    pub key: i32,
    /// Overall loudness in dB, typically -60–0.
    pub loudness: f64,
    /// 1 = major, 0 = minor.
    pub mode: u8,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    /// Estimated tempo in BPM.
    pub tempo: f64,
    pub duration_ms: u64,
    /// Estimated beats per bar (3–7).
    pub time_signature: u8,
}

/// A playlist.
///
/// Returned by [`SpotifyClient::get_playlist`](crate::SpotifyClient::get_playlist)
/// and [`SpotifyClient::get_user_playlists`](crate::SpotifyClient::get_user_playlists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub playlist_id: String,
    pub name: String,
    /// User-written description (may be absent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owner display name, falling back to the owner's user id.
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Total number of items in the playlist.
    pub total_tracks: u32,
    /// First page of tracks (only populated by `get_playlist`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Track>>,
}

struct List<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for List<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

struct Opt<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Opt<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[name={}, album={}, artists={}, popularity={}, track_id={}, album_id={}, \
             artists_id={}, duration_ms={}, explicit={}, release_date={}]",
            self.name,
            self.album,
            List(&self.artists),
            self.popularity,
            self.track_id,
            self.album_id,
            List(&self.artists_id),
            self.duration_ms,
            self.explicit,
            self.release_date,
        )
    }
}

impl fmt::Display for AlbumTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[name={}, track_id={}, artists={}, artists_id={}, track_number={}, \
             disc_number={}, duration_ms={}, explicit={}]",
            self.name,
            self.track_id,
            List(&self.artists),
            List(&self.artists_id),
            self.track_number,
            self.disc_number,
            self.duration_ms,
            self.explicit,
        )
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[id={}, name={}, popularity={}, genres={}]",
            self.id,
            self.name,
            self.popularity,
            List(&self.genres),
        )
    }
}

impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let copyrights = self.copyrights.as_deref().map(List);
        let tracks = self.tracks.as_deref().map(List);
        write!(
            f,
            "[name={}, album_id={}, album_type={}, artists={}, copyrights={}, label={}, \
             popularity={}, release_date={}, total_tracks={}, tracks={}]",
            self.name,
            self.album_id,
            self.album_type,
            List(&self.artists),
            Opt(&copyrights),
            Opt(&self.label),
            Opt(&self.popularity),
            self.release_date,
            self.total_tracks,
            Opt(&tracks),
        )
    }
}

impl fmt::Display for AudioFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[track_id={}, danceability={}, energy={}, key={}, loudness={}, mode={}, \
             speechiness={}, acousticness={}, instrumentalness={}, liveness={}, valence={}, \
             tempo={}, duration_ms={}, time_signature={}]",
            self.track_id,
            self.danceability,
            self.energy,
            self.key,
            self.loudness,
            self.mode,
            self.speechiness,
            self.acousticness,
            self.instrumentalness,
            self.liveness,
            self.valence,
            self.tempo,
            self.duration_ms,
            self.time_signature,
        )
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tracks = self.tracks.as_deref().map(List);
        write!(
            f,
            "[name={}, playlist_id={}, owner={}, description={}, public={}, \
             total_tracks={}, tracks={}]",
            self.name,
            self.playlist_id,
            self.owner,
            Opt(&self.description),
            Opt(&self.public),
            self.total_tracks,
            Opt(&tracks),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_display() {
        let track = Track {
            name: "Breathe".into(),
            album: "DSOTM".into(),
            album_id: "A1".into(),
            artists: vec!["Pink Floyd".into()],
            artists_id: vec!["P1".into()],
            duration_ms: 169_000,
            explicit: false,
            release_date: "1973-03-01".into(),
            popularity: 70,
            track_id: "T1".into(),
        };
        assert_eq!(
            track.to_string(),
            "[name=Breathe, album=DSOTM, artists=[Pink Floyd], popularity=70, track_id=T1, \
             album_id=A1, artists_id=[P1], duration_ms=169000, explicit=false, \
             release_date=1973-03-01]"
        );
    }

    #[test]
    fn artist_display_lists_genres() {
        let artist = Artist {
            id: "P1".into(),
            name: "Pink Floyd".into(),
            popularity: 78,
            genres: vec!["art rock".into(), "progressive rock".into()],
        };
        assert_eq!(
            artist.to_string(),
            "[id=P1, name=Pink Floyd, popularity=78, genres=[art rock, progressive rock]]"
        );
    }

    #[test]
    fn simplified_album_display_shows_missing_fields() {
        let album = Album {
            name: "Animals".into(),
            album_type: "album".into(),
            artists: vec!["Pink Floyd".into()],
            album_id: "X1".into(),
            copyrights: None,
            label: None,
            popularity: None,
            release_date: "1977-01-23".into(),
            total_tracks: 5,
            tracks: None,
        };
        let s = album.to_string();
        assert!(s.contains("label=None"), "{s}");
        assert!(s.contains("tracks=None"), "{s}");
        assert!(s.starts_with("[name=Animals, album_id=X1, album_type=album"), "{s}");
    }

    #[test]
    fn simplified_album_serializes_without_absent_fields() {
        let album = Album {
            name: "Animals".into(),
            album_type: "album".into(),
            artists: vec![],
            album_id: "X1".into(),
            copyrights: None,
            label: None,
            popularity: None,
            release_date: "1977".into(),
            total_tracks: 5,
            tracks: None,
        };
        let json = serde_json::to_value(&album).unwrap();
        assert!(json.get("label").is_none());
        assert!(json.get("tracks").is_none());
        assert_eq!(json["total_tracks"], 5);
    }
}
