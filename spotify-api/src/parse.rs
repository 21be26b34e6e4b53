//! Strict mapping from decoded JSON into the types in [`crate::types`].
//!
//! A missing or mistyped field is reported as [`SpotifyError::Shape`] naming
//! the field; no defaults are substituted.

use crate::error::{Result, SpotifyError};
use crate::types::{Album, AlbumTrack, Artist, AudioFeatures, Playlist, Track};
use serde_json::Value;

fn field<'a>(v: &'a Value, key: &str) -> Result<&'a Value> {
    match v.get(key) {
        Some(f) if !f.is_null() => Ok(f),
        _ => Err(SpotifyError::shape(key, "present")),
    }
}

pub(crate) fn str_field(v: &Value, key: &str) -> Result<String> {
    field(v, key)?
        .as_str()
        .map(String::from)
        .ok_or_else(|| SpotifyError::shape(key, "a string"))
}

/// A field that may be absent or `null`; `None` in either case.
fn optional<'a>(v: &'a Value, key: &str) -> Option<&'a Value> {
    v.get(key).filter(|f| !f.is_null())
}

/// Like [`optional`], but a present value of the wrong type is an error.
fn opt_typed_str(v: &Value, key: &str) -> Result<Option<String>> {
    optional(v, key)
        .map(|f| {
            f.as_str()
                .map(String::from)
                .ok_or_else(|| SpotifyError::shape(key, "a string"))
        })
        .transpose()
}

fn u64_field(v: &Value, key: &str) -> Result<u64> {
    field(v, key)?
        .as_u64()
        .ok_or_else(|| SpotifyError::shape(key, "an unsigned integer"))
}

fn u32_field(v: &Value, key: &str) -> Result<u32> {
    u32::try_from(u64_field(v, key)?).map_err(|_| SpotifyError::shape(key, "a 32-bit integer"))
}

fn f64_field(v: &Value, key: &str) -> Result<f64> {
    field(v, key)?
        .as_f64()
        .ok_or_else(|| SpotifyError::shape(key, "a number"))
}

fn bool_field(v: &Value, key: &str) -> Result<bool> {
    field(v, key)?
        .as_bool()
        .ok_or_else(|| SpotifyError::shape(key, "a boolean"))
}

fn popularity(v: &Value) -> Result<u8> {
    u8::try_from(u64_field(v, "popularity")?)
        .ok()
        .filter(|p| *p <= 100)
        .ok_or_else(|| SpotifyError::shape("popularity", "an integer 0-100"))
}

pub(crate) fn array<'a>(v: &'a Value, key: &str) -> Result<&'a Vec<Value>> {
    field(v, key)?
        .as_array()
        .ok_or_else(|| SpotifyError::shape(key, "an array"))
}

fn strings(v: &Value, key: &str) -> Result<Vec<String>> {
    array(v, key)?
        .iter()
        .map(|s| {
            s.as_str()
                .map(String::from)
                .ok_or_else(|| SpotifyError::shape(key, "an array of strings"))
        })
        .collect()
}

/// Split an `artists` array into parallel name and id lists.
fn artist_refs(v: &Value) -> Result<(Vec<String>, Vec<String>)> {
    let mut names = Vec::new();
    let mut ids = Vec::new();
    for a in array(v, "artists")? {
        names.push(str_field(a, "name")?);
        ids.push(str_field(a, "id")?);
    }
    Ok((names, ids))
}

/// Map a full track object. `track_id` is recorded as given.
pub(crate) fn track(v: &Value, track_id: &str) -> Result<Track> {
    let album = field(v, "album")?;
    let (artists, artists_id) = artist_refs(v)?;
    Ok(Track {
        name: str_field(v, "name")?,
        album: str_field(album, "name")?,
        album_id: str_field(album, "id")?,
        artists,
        artists_id,
        duration_ms: u64_field(v, "duration_ms")?,
        explicit: bool_field(v, "explicit")?,
        release_date: str_field(album, "release_date")?,
        popularity: popularity(v)?,
        track_id: track_id.to_owned(),
    })
}

/// Map a full track object, taking the id from the object itself.
pub(crate) fn track_with_own_id(v: &Value) -> Result<Track> {
    track(v, &str_field(v, "id")?)
}

pub(crate) fn album_track(v: &Value) -> Result<AlbumTrack> {
    let (artists, artists_id) = artist_refs(v)?;
    Ok(AlbumTrack {
        track_id: str_field(v, "id")?,
        name: str_field(v, "name")?,
        artists,
        artists_id,
        duration_ms: u64_field(v, "duration_ms")?,
        explicit: bool_field(v, "explicit")?,
        track_number: u32_field(v, "track_number")?,
        disc_number: u32_field(v, "disc_number")?,
    })
}

/// Map an artist object. `id` is recorded as given.
pub(crate) fn artist(v: &Value, id: &str) -> Result<Artist> {
    Ok(Artist {
        id: id.to_owned(),
        name: str_field(v, "name")?,
        popularity: popularity(v)?,
        genres: strings(v, "genres")?,
    })
}

/// Map a full or simplified album object.
///
/// Fields that only the full object carries become `None` when absent.
pub(crate) fn album(v: &Value) -> Result<Album> {
    let (artists, _) = artist_refs(v)?;
    let copyrights = optional(v, "copyrights")
        .map(|c| {
            c.as_array()
                .ok_or_else(|| SpotifyError::shape("copyrights", "an array"))?
                .iter()
                .map(|c| str_field(c, "text"))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;
    let popularity = match optional(v, "popularity") {
        Some(_) => Some(popularity(v)?),
        None => None,
    };
    let tracks = optional(v, "tracks")
        .map(|page| page_items(page, album_track))
        .transpose()?;
    Ok(Album {
        name: str_field(v, "name")?,
        album_type: str_field(v, "album_type")?,
        artists,
        album_id: str_field(v, "id")?,
        copyrights,
        label: opt_typed_str(v, "label")?,
        popularity,
        release_date: str_field(v, "release_date")?,
        total_tracks: u32_field(v, "total_tracks")?,
        tracks,
    })
}

pub(crate) fn audio_features(v: &Value, track_id: &str) -> Result<AudioFeatures> {
    let key = field(v, "key")?
        .as_i64()
        .and_then(|k| i32::try_from(k).ok())
        .ok_or_else(|| SpotifyError::shape("key", "an integer"))?;
    let mode = u8::try_from(u64_field(v, "mode")?)
        .map_err(|_| SpotifyError::shape("mode", "0 or 1"))?;
    let time_signature = u8::try_from(u64_field(v, "time_signature")?)
        .map_err(|_| SpotifyError::shape("time_signature", "a small integer"))?;
    Ok(AudioFeatures {
        track_id: track_id.to_owned(),
        danceability: f64_field(v, "danceability")?,
        energy: f64_field(v, "energy")?,
        key,
        loudness: f64_field(v, "loudness")?,
        mode,
        speechiness: f64_field(v, "speechiness")?,
        acousticness: f64_field(v, "acousticness")?,
        instrumentalness: f64_field(v, "instrumentalness")?,
        liveness: f64_field(v, "liveness")?,
        valence: f64_field(v, "valence")?,
        tempo: f64_field(v, "tempo")?,
        duration_ms: u64_field(v, "duration_ms")?,
        time_signature,
    })
}

/// Map a playlist object. With `with_tracks`, the `tracks.items[].track`
/// entries are mapped too; null tracks and tracks without an id (local
/// files) are skipped.
pub(crate) fn playlist(v: &Value, with_tracks: bool) -> Result<Playlist> {
    let owner = field(v, "owner")?;
    let page = field(v, "tracks")?;
    let tracks = if with_tracks {
        let mut tracks = Vec::new();
        for item in array(page, "items")? {
            match item.get("track") {
                Some(t) if t.get("id").is_some_and(Value::is_string) => {
                    tracks.push(track_with_own_id(t)?);
                }
                _ => {}
            }
        }
        Some(tracks)
    } else {
        None
    };
    Ok(Playlist {
        playlist_id: str_field(v, "id")?,
        name: str_field(v, "name")?,
        description: opt_typed_str(v, "description")?.filter(|d| !d.is_empty()),
        owner: opt_typed_str(owner, "display_name")?.map_or_else(|| str_field(owner, "id"), Ok)?,
        public: optional(v, "public")
            .map(|p| p.as_bool().ok_or_else(|| SpotifyError::shape("public", "a boolean")))
            .transpose()?,
        total_tracks: u32_field(page, "total")?,
        tracks,
    })
}

/// Map the `items` of a paging object.
pub(crate) fn page_items<T>(page: &Value, f: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
    array(page, "items")?.iter().map(f).collect()
}
