use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use serde::Serialize;
use spotify_api::{Credentials, SpotifyClient, Track};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotify", version, about = "Spotify Web API catalog CLI")]
struct Cli {
    /// Print results as pretty JSON
    #[arg(long, global = true)]
    json: bool,
    /// Response format requested from the API
    #[arg(long, global = true, default_value = "json")]
    format: String,
    /// Also save the result as pretty JSON to this file
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Save client credentials
    Login {
        /// Client ID from the Spotify developer dashboard
        #[arg(required_unless_present = "check")]
        client_id: Option<String>,
        /// Client secret
        #[arg(required_unless_present = "check")]
        client_secret: Option<String>,
        /// Check that the configured credentials obtain a token
        #[arg(long)]
        check: bool,
    },
    /// Clear saved credentials
    Logout,
    /// Print a fresh access token
    Token,
    /// Show album details
    Album {
        /// Album ID, share link or URI
        album: String,
    },
    /// List an album's tracks
    AlbumTracks {
        /// Album ID, share link or URI
        album: String,
    },
    /// Show track details
    Track {
        /// Track ID, share link or URI
        track: String,
    },
    /// Show a track's audio features
    Features {
        /// Track ID, share link or URI
        track: String,
    },
    /// Show artist details
    Artist {
        /// Artist ID, share link or URI
        artist: String,
    },
    /// List an artist's albums
    ArtistAlbums {
        /// Artist ID, share link or URI
        artist: String,
    },
    /// List an artist's top tracks
    TopTracks {
        /// Artist ID, share link or URI
        artist: String,
        /// Market (ISO 3166-1 alpha-2)
        #[arg(short, long, default_value = spotify_api::DEFAULT_COUNTRY)]
        country: String,
    },
    /// List related artists
    Related {
        /// Artist ID, share link or URI
        artist: String,
    },
    /// Show playlist details
    Playlist {
        /// Playlist ID, share link or URI
        playlist: String,
    },
    /// List a user's public playlists
    UserPlaylists {
        /// User ID
        user: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let out = Output {
        json: cli.json,
        file: cli.output,
    };
    match cli.command {
        Command::Login {
            client_id,
            client_secret,
            check,
        } => cmd_login(client_id, client_secret, check, &cli.format),
        Command::Logout => cmd_logout(),
        Command::Token => cmd_token(&cli.format),
        Command::Album { album } => {
            let album = client(&cli.format)?.get_album(resource_id(&album, "album")?)?;
            out.one(&album)
        }
        Command::AlbumTracks { album } => {
            let tracks = client(&cli.format)?.get_album_tracks(resource_id(&album, "album")?)?;
            out.list(&tracks, |t| format!("[{}] {}. {}", t.track_id, t.track_number, t.name))
        }
        Command::Track { track } => {
            let track = client(&cli.format)?.get_track(resource_id(&track, "track")?)?;
            if out.json {
                out.one(&track)
            } else {
                out.save(&track)?;
                print_track(&track);
                Ok(())
            }
        }
        Command::Features { track } => {
            let features =
                client(&cli.format)?.get_track_audio_features(resource_id(&track, "track")?)?;
            out.one(&features)
        }
        Command::Artist { artist } => {
            let artist = client(&cli.format)?.get_artist(resource_id(&artist, "artist")?)?;
            out.one(&artist)
        }
        Command::ArtistAlbums { artist } => {
            let albums =
                client(&cli.format)?.get_artist_albums(resource_id(&artist, "artist")?)?;
            out.list(&albums, |a| format!("[{}] {} ({})", a.album_id, a.name, a.release_date))
        }
        Command::TopTracks { artist, country } => {
            let tracks = client(&cli.format)?
                .get_artist_top_tracks(resource_id(&artist, "artist")?, Some(&country))?;
            out.list(&tracks, |t| format!("[{}] {} - {}", t.track_id, t.name, t.album))
        }
        Command::Related { artist } => {
            let artists =
                client(&cli.format)?.get_artist_related(resource_id(&artist, "artist")?)?;
            out.list(&artists, |a| format!("[{}] {} (popularity {})", a.id, a.name, a.popularity))
        }
        Command::Playlist { playlist } => cmd_playlist(&cli.format, &out, &playlist),
        Command::UserPlaylists { user } => {
            let lists = client(&cli.format)?.get_user_playlists(resource_id(&user, "user")?)?;
            out.list(&lists, |p| {
                format!("[{}] {} ({} tracks)", p.playlist_id, p.name, p.total_tracks)
            })
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn client(format: &str) -> Result<SpotifyClient> {
    let creds = Credentials::load().context(
        "no credentials: run `spotify login <CLIENT_ID> <CLIENT_SECRET>` \
         or set SPOTIFY_CLIENT_ID/SPOTIFY_CLIENT_SECRET",
    )?;
    tracing::debug!(client_id = creds.client_id(), format, "loaded credentials");
    Ok(SpotifyClient::with_format(creds, format)?)
}

/// Reduce a share link (`https://open.spotify.com/track/<id>?si=...`, optionally
/// with an `intl-xx/` locale segment) or URI (`spotify:track:<id>`) to the bare
/// id. Anything else is taken as an id already.
fn resource_id<'a>(input: &'a str, kind: &str) -> Result<&'a str> {
    let input = input.trim();
    let tagged = if let Some(path) = input.strip_prefix("https://open.spotify.com/") {
        let path = match path.split_once('/') {
            Some((locale, rest)) if locale.starts_with("intl-") => rest,
            _ => path,
        };
        path.split_once('/')
    } else if let Some(uri) = input.strip_prefix("spotify:") {
        uri.split_once(':')
    } else {
        None
    };
    let id = match tagged {
        Some((found, id)) => {
            ensure!(found == kind, "expected a {kind} link, not {found}: {input}");
            id
        }
        None => input,
    };
    Ok(id.split(['?', '#']).next().unwrap_or(id))
}

struct Output {
    json: bool,
    file: Option<PathBuf>,
}

impl Output {
    /// Write `value` as pretty JSON to the `--output` file, if one was given.
    fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let Some(path) = &self.file else {
            return Ok(());
        };
        let data = serde_json::to_string_pretty(value)?;
        fs::write(path, data).with_context(|| format!("cannot write {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved JSON output");
        Ok(())
    }

    fn one<T: Serialize + Display>(&self, value: &T) -> Result<()> {
        self.save(value)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{value}");
        }
        Ok(())
    }

    fn list<T: Serialize>(&self, items: &[T], line: impl Fn(&T) -> String) -> Result<()> {
        self.save(items)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(items)?);
        } else {
            for item in items {
                println!("  {}", line(item));
            }
        }
        Ok(())
    }
}

// ── login / logout / token ──

fn cmd_login(
    client_id: Option<String>,
    client_secret: Option<String>,
    check: bool,
    format: &str,
) -> Result<()> {
    if check {
        match client(format)?.authenticate() {
            Ok(token) => println!(
                "Credentials OK (token type {}, expires in {}s)",
                token.token_type(),
                token.expires_in()
            ),
            Err(e) => println!("Credentials found but authentication failed: {e}"),
        }
        return Ok(());
    }

    let client_id = client_id.context("client ID required")?;
    let client_secret = client_secret.context("client secret required")?;
    Credentials::new(client_id, client_secret).save()?;
    println!("Credentials saved.");
    Ok(())
}

fn cmd_logout() -> Result<()> {
    Credentials::clear()?;
    println!("Credentials cleared.");
    Ok(())
}

fn cmd_token(format: &str) -> Result<()> {
    let token = client(format)?.authenticate()?;
    println!("{}", token.as_str());
    Ok(())
}

// ── track / playlist ──

fn print_track(t: &Track) {
    println!("Track:    {} (id={})", t.name, t.track_id);
    println!("Artists:  {}", t.artists.join(", "));
    println!("Album:    {} (id={}, released {})", t.album, t.album_id, t.release_date);
    println!(
        "Duration: {}:{:02}{}",
        t.duration_ms / 60000,
        (t.duration_ms / 1000) % 60,
        if t.explicit { "  [explicit]" } else { "" }
    );
    println!("Popularity: {}", t.popularity);
}

fn cmd_playlist(format: &str, out: &Output, playlist: &str) -> Result<()> {
    let p = client(format)?.get_playlist(resource_id(playlist, "playlist")?)?;
    if out.json {
        return out.one(&p);
    }
    out.save(&p)?;
    println!("Playlist: {} (id={})", p.name, p.playlist_id);
    println!("Owner:    {}", p.owner);
    println!("Tracks:   {}", p.total_tracks);
    if let Some(desc) = &p.description {
        println!("Desc:     {desc}");
    }
    if let Some(tracks) = &p.tracks {
        println!();
        for t in tracks {
            println!("  [{}] {} - {}", t.track_id, t.artists.join(", "), t.name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_id_accepts_share_links_and_uris() {
        assert_eq!(
            resource_id(
                "https://open.spotify.com/album/31qVWUdRrlb8thMvts0yYL?si=D1zRNNpgQhm2u4ghc4lE1g",
                "album"
            )
            .unwrap(),
            "31qVWUdRrlb8thMvts0yYL"
        );
        assert_eq!(
            resource_id("spotify:track:7l5j3FapCyr6HxUgoAynM2", "track").unwrap(),
            "7l5j3FapCyr6HxUgoAynM2"
        );
        assert_eq!(
            resource_id("3dv4Q4q3LWOnbLJnC6GgTY", "artist").unwrap(),
            "3dv4Q4q3LWOnbLJnC6GgTY"
        );
        assert_eq!(
            resource_id("6kf46HbnYCZzP6rjvQHYzg?si=abc", "album").unwrap(),
            "6kf46HbnYCZzP6rjvQHYzg"
        );
    }

    #[test]
    fn resource_id_skips_locale_segment() {
        assert_eq!(
            resource_id("https://open.spotify.com/intl-fr/track/7l5j3FapCyr6HxUgoAynM2", "track")
                .unwrap(),
            "7l5j3FapCyr6HxUgoAynM2"
        );
    }

    #[test]
    fn resource_id_rejects_wrong_kind() {
        let err = resource_id("https://open.spotify.com/album/31qVWUdRrlb8thMvts0yYL", "track")
            .unwrap_err();
        assert!(err.to_string().contains("expected a track link, not album"));
        assert!(resource_id("spotify:artist:3dv4Q4q3LWOnbLJnC6GgTY", "playlist").is_err());
    }

    #[test]
    fn cli_parses_top_tracks_country() {
        let cli =
            Cli::try_parse_from(["spotify", "top-tracks", "A1", "--country", "FR", "--json"])
                .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::TopTracks { artist, country } => {
                assert_eq!(artist, "A1");
                assert_eq!(country, "FR");
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn output_flag_saves_pretty_json() {
        let path = std::env::temp_dir().join(format!("spotify-cli-{}.json", std::process::id()));
        let cli = Cli::try_parse_from(["spotify", "album", "A1", "-o", path.to_str().unwrap()])
            .unwrap();
        assert_eq!(cli.output.as_deref(), Some(path.as_path()));

        let out = Output {
            json: false,
            file: cli.output,
        };
        out.save(&["A1", "A2"]).unwrap();
        let saved: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, ["A1", "A2"]);
        fs::remove_file(&path).unwrap();
    }
}
