use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Song {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default, alias = "albumId")]
    pub album_id: Option<String>,
    /// Display duration as shipped with the catalog, e.g. `"3:12"`.
    #[serde(default)]
    pub duration: Option<String>,
}

impl Song {
    /// Artist names joined for display. Empty when the song lists none.
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub artists: Vec<String>,
}

/// The active playback context: a song, the playlist it was picked from, and
/// that playlist's ordered track list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CurrentMusic {
    #[serde(default)]
    pub song: Option<Song>,
    #[serde(default)]
    pub playlist: Option<Playlist>,
    #[serde(default)]
    pub songs: Vec<Song>,
}

impl CurrentMusic {
    pub fn new(song: Song, playlist: Playlist, songs: Vec<Song>) -> Self {
        Self {
            song: Some(song),
            playlist: Some(playlist),
            songs,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.song.is_some()
    }

    /// Position of the song with `id` in the track list.
    pub fn song_index(&self, id: &str) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    /// Same playlist and track list, different active song.
    pub fn with_song(&self, song: Song) -> Self {
        Self {
            song: Some(song),
            playlist: self.playlist.clone(),
            songs: self.songs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str) -> Song {
        Song {
            id: id.to_string(),
            title: format!("Song {id}"),
            ..Default::default()
        }
    }

    #[test]
    fn artist_line_joins_with_comma() {
        let mut s = song("1");
        assert_eq!(s.artist_line(), "");
        s.artists = vec!["Quevedo".to_string(), "Bizarrap".to_string()];
        assert_eq!(s.artist_line(), "Quevedo, Bizarrap");
    }

    #[test]
    fn song_index_finds_by_id() {
        let music = CurrentMusic::new(
            song("2"),
            Playlist::default(),
            vec![song("1"), song("2"), song("3")],
        );
        assert_eq!(music.song_index("2"), Some(1));
        assert_eq!(music.song_index("9"), None);
    }

    #[test]
    fn song_deserializes_with_missing_optionals() {
        let s: Song = serde_json::from_str(r#"{"id":"1","title":"Moonlight"}"#).unwrap();
        assert!(s.artists.is_empty());
        assert!(s.image.is_none());
    }

    #[test]
    fn album_id_accepts_camel_case() {
        let s: Song =
            serde_json::from_str(r#"{"id":"1","title":"x","albumId":"4"}"#).unwrap();
        assert_eq!(s.album_id.as_deref(), Some("4"));
    }
}
