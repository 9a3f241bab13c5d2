//! Playback state shared between the player widget and its siblings.
//!
//! The store contract is the [`PlaybackStore`] trait. [`PlayerStore`] backs
//! it with Dioxus signals for the UI; [`PlaybackState`] is the plain-data
//! version used off the render tree.

use crate::api::models::{CurrentMusic, Song};
use dioxus::prelude::*;

pub trait PlaybackStore {
    fn current_music(&self) -> CurrentMusic;
    fn set_current_music(&mut self, next: CurrentMusic);
    fn is_playing(&self) -> bool;
    fn set_is_playing(&mut self, playing: bool);
    fn volume(&self) -> f64;
    /// Clamped into `[0, 1]`; non-finite values are ignored.
    fn set_volume(&mut self, volume: f64);
}

fn clamp_volume(volume: f64) -> Option<f64> {
    volume.is_finite().then(|| volume.clamp(0.0, 1.0))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current_music: CurrentMusic,
    pub is_playing: bool,
    pub volume: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_music: CurrentMusic::default(),
            is_playing: false,
            volume: 1.0,
        }
    }
}

impl PlaybackStore for PlaybackState {
    fn current_music(&self) -> CurrentMusic {
        self.current_music.clone()
    }

    fn set_current_music(&mut self, next: CurrentMusic) {
        self.current_music = next;
    }

    fn is_playing(&self) -> bool {
        self.is_playing
    }

    fn set_is_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        if let Some(v) = clamp_volume(volume) {
            self.volume = v;
        }
    }
}

/// Signal-backed store handed to components through context.
///
/// Each field is its own signal so effects only re-run for the piece of state
/// they read. Trait getters use `peek` and never subscribe; render code reads
/// the signals directly.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerStore {
    pub current_music: Signal<CurrentMusic>,
    pub is_playing: Signal<bool>,
    pub volume: Signal<f64>,
}

impl PlaybackStore for PlayerStore {
    fn current_music(&self) -> CurrentMusic {
        self.current_music.peek().clone()
    }

    fn set_current_music(&mut self, next: CurrentMusic) {
        self.current_music.set(next);
    }

    fn is_playing(&self) -> bool {
        *self.is_playing.peek()
    }

    fn set_is_playing(&mut self, playing: bool) {
        if *self.is_playing.peek() != playing {
            self.is_playing.set(playing);
        }
    }

    fn volume(&self) -> f64 {
        *self.volume.peek()
    }

    fn set_volume(&mut self, volume: f64) {
        if let Some(v) = clamp_volume(volume) {
            self.volume.set(v);
        }
    }
}

/// Create the store signals for this scope and provide them as context.
pub fn use_player_store(initial_volume: f64) -> PlayerStore {
    let current_music = use_signal(CurrentMusic::default);
    let is_playing = use_signal(|| false);
    let volume = use_signal(|| initial_volume.clamp(0.0, 1.0));
    use_context_provider(|| PlayerStore {
        current_music,
        is_playing,
        volume,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

/// The song one step away from the current one, if there is one.
pub fn neighbor(music: &CurrentMusic, step: Step) -> Option<Song> {
    let current = music.song.as_ref()?;
    let index = music.song_index(&current.id)?;
    let target = match step {
        Step::Next => index.checked_add(1).filter(|i| *i < music.songs.len())?,
        Step::Prev => index.checked_sub(1)?,
    };
    music.songs.get(target).cloned()
}

pub fn toggle_play<S: PlaybackStore>(store: &mut S) {
    if !store.current_music().is_loaded() {
        return;
    }
    let playing = store.is_playing();
    store.set_is_playing(!playing);
}

/// Move to the adjacent track: pause, swap `current_music`, resume.
/// Returns `false` without touching the store when there is nowhere to go.
pub fn skip<S: PlaybackStore>(store: &mut S, step: Step) -> bool {
    let music = store.current_music();
    let Some(target) = neighbor(&music, step) else {
        tracing::debug!(?step, "skip ignored, no adjacent track");
        return false;
    };
    tracing::debug!(?step, song_id = %target.id, "skipping track");
    store.set_is_playing(false);
    store.set_current_music(music.with_song(target));
    store.set_is_playing(true);
    true
}

pub fn next_song<S: PlaybackStore>(store: &mut S) -> bool {
    skip(store, Step::Next)
}

pub fn prev_song<S: PlaybackStore>(store: &mut S) -> bool {
    skip(store, Step::Prev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Playlist;

    fn song(id: &str) -> Song {
        Song {
            id: id.to_string(),
            title: id.to_uppercase(),
            ..Default::default()
        }
    }

    fn state_at(id: &str) -> PlaybackState {
        let songs = vec![song("a"), song("b"), song("c")];
        let playlist = Playlist {
            id: "1".to_string(),
            ..Default::default()
        };
        PlaybackState {
            current_music: CurrentMusic::new(song(id), playlist, songs),
            is_playing: false,
            volume: 0.5,
        }
    }

    #[test]
    fn next_moves_forward_and_plays() {
        let mut state = state_at("b");
        assert!(next_song(&mut state));
        assert_eq!(state.current_music.song.as_ref().map(|s| s.id.as_str()), Some("c"));
        assert!(state.is_playing);
        assert_eq!(state.current_music.songs.len(), 3);
        assert_eq!(state.current_music.playlist.as_ref().map(|p| p.id.as_str()), Some("1"));
    }

    #[test]
    fn prev_moves_back() {
        let mut state = state_at("b");
        assert!(prev_song(&mut state));
        assert_eq!(state.current_music.song.as_ref().map(|s| s.id.as_str()), Some("a"));
    }

    #[test]
    fn prev_on_first_is_noop() {
        let mut state = state_at("a");
        let before = state.clone();
        assert!(!prev_song(&mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn next_on_last_is_noop() {
        let mut state = state_at("c");
        let before = state.clone();
        assert!(!next_song(&mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn nothing_loaded_changes_nothing() {
        let mut state = PlaybackState::default();
        let before = state.clone();
        assert!(!next_song(&mut state));
        assert!(!prev_song(&mut state));
        toggle_play(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn song_missing_from_list_is_noop() {
        let mut state = state_at("b");
        state.current_music.song = Some(song("z"));
        let before = state.clone();
        assert!(!next_song(&mut state));
        assert!(!prev_song(&mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_flips_playing() {
        let mut state = state_at("a");
        toggle_play(&mut state);
        assert!(state.is_playing);
        toggle_play(&mut state);
        assert!(!state.is_playing);
    }

    #[test]
    fn volume_is_clamped() {
        let mut state = PlaybackState::default();
        state.set_volume(1.7);
        assert_eq!(state.volume, 1.0);
        state.set_volume(-0.2);
        assert_eq!(state.volume, 0.0);
        state.set_volume(f64::NAN);
        assert_eq!(state.volume, 0.0);
        state.set_volume(0.25);
        assert_eq!(state.volume, 0.25);
    }
}
