use crate::api::models::{CurrentMusic, Playlist, Song};
use crate::config::PlayerConfig;
use crate::error::LibraryError;
use serde::{Deserialize, Serialize};

const BUNDLED_LIBRARY: &str = include_str!("../../assets/library.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    #[serde(flatten)]
    pub playlist: Playlist,
    #[serde(default)]
    pub songs: Vec<Song>,
}

impl PlaylistEntry {
    /// Playback context for starting `song_id` from this playlist.
    pub fn context_for(&self, song_id: &str) -> Option<CurrentMusic> {
        let song = self.songs.iter().find(|s| s.id == song_id)?.clone();
        Some(CurrentMusic::new(song, self.playlist.clone(), self.songs.clone()))
    }
}

/// Playlists and their tracks, plus the player config shipped alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub config: PlayerConfig,
    #[serde(default)]
    pub playlists: Vec<PlaylistEntry>,
}

impl Library {
    pub fn from_json(raw: &str) -> Result<Self, LibraryError> {
        let mut library: Library = serde_json::from_str(raw)?;
        if let Some(empty) = library.playlists.iter().find(|p| p.songs.is_empty()) {
            return Err(LibraryError::EmptyPlaylist(empty.playlist.id.clone()));
        }
        library.config = library.config.normalized();
        tracing::debug!(playlists = library.playlists.len(), "library loaded");
        Ok(library)
    }

    pub fn bundled() -> Result<Self, LibraryError> {
        Self::from_json(BUNDLED_LIBRARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_library_parses() {
        let library = Library::bundled().unwrap();
        assert!(!library.playlists.is_empty());
        assert_eq!(library.config.media_root, "/music");
    }

    #[test]
    fn context_carries_playlist_and_tracks() {
        let library = Library::bundled().unwrap();
        let entry = &library.playlists[0];
        let music = entry.context_for("2").unwrap();
        assert_eq!(music.song.as_ref().map(|s| s.id.as_str()), Some("2"));
        assert_eq!(music.playlist.as_ref(), Some(&entry.playlist));
        assert_eq!(music.songs, entry.songs);
        assert!(entry.context_for("99").is_none());
    }

    #[test]
    fn missing_config_uses_defaults() {
        let raw = r#"{"playlists":[{"id":"4","title":"x","songs":[{"id":"1","title":"a"}]}]}"#;
        let library = Library::from_json(raw).unwrap();
        assert_eq!(library.config, PlayerConfig::default());
    }

    #[test]
    fn empty_playlist_is_rejected() {
        let raw = r#"{"playlists":[{"id":"4","title":"x","songs":[]}]}"#;
        assert!(matches!(
            Library::from_json(raw),
            Err(LibraryError::EmptyPlaylist(id)) if id == "4"
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Library::from_json("{"), Err(LibraryError::Parse(_))));
    }
}
