use serde::{Deserialize, Serialize};

/// One playable entry of the server catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    pub filename: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default, alias = "coverArt")]
    pub art: Option<String>,
}

impl Track {
    /// Title to render, falling back to the filename without its extension.
    pub fn display_title(&self) -> String {
        let title = self.title.trim();
        if !title.is_empty() {
            return title.to_string();
        }
        match self.filename.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => self.filename.clone(),
        }
    }

    pub fn display_artist(&self) -> &str {
        self.artist
            .as_deref()
            .map(str::trim)
            .filter(|artist| !artist.is_empty())
            .unwrap_or("Unknown")
    }

    /// Artwork path when the server has real art for this track.
    pub fn custom_art(&self, default_art: &str) -> Option<&str> {
        self.art
            .as_deref()
            .map(str::trim)
            .filter(|art| !art.is_empty() && *art != default_art)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    Empty,
    Tracks(Vec<Track>),
}

impl Catalog {
    pub fn track_count(&self) -> usize {
        match self {
            Catalog::Empty => 0,
            Catalog::Tracks(tracks) => tracks.len(),
        }
    }
}

/// Which wire shape the catalog arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogShape {
    /// `{ "empty": true }` or `{ "songs": [...] }`.
    Envelope,
    /// A bare array of tracks, kept only for older servers.
    Legacy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogResponse {
    pub catalog: Catalog,
    pub shape: CatalogShape,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    Legacy(Vec<Track>),
    Envelope(CatalogEnvelope),
}

#[derive(Deserialize)]
struct CatalogEnvelope {
    #[serde(default)]
    empty: bool,
    #[serde(default)]
    songs: Option<Vec<Track>>,
}

impl CatalogResponse {
    pub fn from_json(body: &str, accept_legacy: bool) -> Result<Self, String> {
        let payload: CatalogPayload = serde_json::from_str(body).map_err(|e| e.to_string())?;
        match payload {
            CatalogPayload::Envelope(envelope) => {
                let catalog = if envelope.empty {
                    Catalog::Empty
                } else {
                    match envelope.songs {
                        Some(songs) if songs.is_empty() => Catalog::Empty,
                        Some(songs) => Catalog::Tracks(songs),
                        None => return Err("catalog has neither `empty` nor `songs`".to_string()),
                    }
                };
                Ok(Self {
                    catalog,
                    shape: CatalogShape::Envelope,
                })
            }
            CatalogPayload::Legacy(songs) => {
                if !accept_legacy {
                    return Err("bare track arrays are no longer accepted".to_string());
                }
                let catalog = if songs.is_empty() {
                    Catalog::Empty
                } else {
                    Catalog::Tracks(songs)
                };
                Ok(Self {
                    catalog,
                    shape: CatalogShape::Legacy,
                })
            }
        }
    }
}

/// Body of `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UploadReceipt {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Set by servers that finish indexing before answering.
    #[serde(default)]
    pub indexed: bool,
}

/// What a command does to the local playing/paused flag once it succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEffect {
    Starts,
    Halts,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCommand {
    /// Server picks a random track.
    Play,
    PlaySong(String),
    Pause,
    Resume,
    Stop,
    Next,
    Prev,
    Custom { path: String, effect: PlaybackEffect },
}

impl TransportCommand {
    pub fn path(&self) -> String {
        match self {
            TransportCommand::Play => "/play".to_string(),
            TransportCommand::PlaySong(filename) => {
                format!("/play_song/{}", urlencoding::encode(filename))
            }
            TransportCommand::Pause => "/pause".to_string(),
            TransportCommand::Resume => "/resume".to_string(),
            TransportCommand::Stop => "/stop".to_string(),
            TransportCommand::Next => "/next".to_string(),
            TransportCommand::Prev => "/prev".to_string(),
            TransportCommand::Custom { path, .. } => {
                if path.starts_with('/') {
                    path.clone()
                } else {
                    format!("/{path}")
                }
            }
        }
    }

    pub fn effect(&self) -> PlaybackEffect {
        match self {
            TransportCommand::Play
            | TransportCommand::PlaySong(_)
            | TransportCommand::Resume
            | TransportCommand::Next
            | TransportCommand::Prev => PlaybackEffect::Starts,
            TransportCommand::Pause | TransportCommand::Stop => PlaybackEffect::Halts,
            TransportCommand::Custom { effect, .. } => *effect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_songs_keeps_server_order() {
        let body = r#"{"songs":[
            {"filename":"b.mp3","title":"B","artist":"Two","art":"/static/covers/b.jpg"},
            {"filename":"a.mp3","title":"A"}
        ]}"#;
        let response = CatalogResponse::from_json(body, false).unwrap();
        assert_eq!(response.shape, CatalogShape::Envelope);
        let Catalog::Tracks(tracks) = response.catalog else {
            panic!("expected tracks");
        };
        assert_eq!(tracks[0].filename, "b.mp3");
        assert_eq!(tracks[1].filename, "a.mp3");
        assert_eq!(tracks[1].artist, None);
    }

    #[test]
    fn empty_marker_wins_over_songs() {
        let response = CatalogResponse::from_json(r#"{"empty":true}"#, false).unwrap();
        assert_eq!(response.catalog, Catalog::Empty);

        let response =
            CatalogResponse::from_json(r#"{"empty":true,"songs":[{"filename":"x.mp3"}]}"#, false)
                .unwrap();
        assert_eq!(response.catalog, Catalog::Empty);

        let response = CatalogResponse::from_json(r#"{"songs":[]}"#, false).unwrap();
        assert_eq!(response.catalog, Catalog::Empty);
    }

    #[test]
    fn legacy_array_is_gated() {
        let body = r#"[{"filename":"x.mp3","title":"X","artist":null}]"#;
        assert!(CatalogResponse::from_json(body, false).is_err());

        let response = CatalogResponse::from_json(body, true).unwrap();
        assert_eq!(response.shape, CatalogShape::Legacy);
        assert_eq!(response.catalog.track_count(), 1);
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(CatalogResponse::from_json("{}", true).is_err());
        assert!(CatalogResponse::from_json("Stopped.", true).is_err());
        assert!(CatalogResponse::from_json(r#"{"songs":[{"title":"no filename"}]}"#, true).is_err());
    }

    #[test]
    fn display_fallbacks() {
        let track = Track {
            filename: "Band - Song.flac".to_string(),
            title: "  ".to_string(),
            artist: Some(String::new()),
            art: Some("/static/covers/default_art.png".to_string()),
        };
        assert_eq!(track.display_title(), "Band - Song");
        assert_eq!(track.display_artist(), "Unknown");
        assert_eq!(track.custom_art("/static/covers/default_art.png"), None);

        let track = Track {
            art: Some("/static/covers/Band-Song.jpg".to_string()),
            ..track
        };
        assert_eq!(
            track.custom_art("/static/covers/default_art.png"),
            Some("/static/covers/Band-Song.jpg")
        );
    }

    #[test]
    fn command_paths_and_effects() {
        let cmd = TransportCommand::PlaySong("My Song #1.mp3".to_string());
        assert_eq!(cmd.path(), "/play_song/My%20Song%20%231.mp3");
        assert_eq!(cmd.effect(), PlaybackEffect::Starts);
        assert_eq!(TransportCommand::Stop.effect(), PlaybackEffect::Halts);
        assert_eq!(TransportCommand::Pause.effect(), PlaybackEffect::Halts);

        let custom = TransportCommand::Custom {
            path: "library".to_string(),
            effect: PlaybackEffect::Unchanged,
        };
        assert_eq!(custom.path(), "/library");
        assert_eq!(custom.effect(), PlaybackEffect::Unchanged);
    }

    #[test]
    fn upload_receipt_defaults() {
        let receipt: UploadReceipt = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.message, None);
        assert!(!receipt.indexed);
    }
}
