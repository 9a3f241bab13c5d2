// Effect bodies that push store state onto the media element.
use super::media::MediaElement;
use crate::api::models::CurrentMusic;
use crate::utils::media_source_path;

pub fn apply_play_state(media: &dyn MediaElement, playing: bool) {
    let result = if playing { media.play() } else { media.pause() };
    if let Err(err) = result {
        tracing::warn!(%err, playing, "failed to apply play state");
    }
}

pub fn apply_volume(media: &dyn MediaElement, volume: f64) {
    tracing::trace!(volume, "applying volume");
    media.set_volume(volume);
}

/// Point the element at the active song and start it, regardless of the
/// store's play flag. Returns the loaded source, or `None` when no song is
/// selected or the source was refused.
pub fn load_track(
    media: &dyn MediaElement,
    music: &CurrentMusic,
    volume: f64,
    media_root: &str,
) -> Option<String> {
    let song = music.song.as_ref()?;
    let src = media_source_path(media_root, music.playlist.as_ref(), song);
    if let Err(err) = media.set_source(&src) {
        tracing::warn!(%err, song_id = %song.id, "failed to load track");
        return None;
    }
    media.set_volume(volume);
    if let Err(err) = media.play() {
        tracing::warn!(%err, %src, "autoplay failed");
    }
    tracing::debug!(%src, song_id = %song.id, "track loaded");
    Some(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Playlist, Song};
    use crate::components::audio_manager::{MediaCall, MemoryMedia, RecordingMedia};

    fn music(playlist_id: &str, song_id: &str) -> CurrentMusic {
        let song = Song {
            id: song_id.to_string(),
            title: "Track".to_string(),
            ..Default::default()
        };
        let playlist = Playlist {
            id: playlist_id.to_string(),
            ..Default::default()
        };
        CurrentMusic::new(song.clone(), playlist, vec![song])
    }

    #[test]
    fn track_change_sets_source_volume_and_plays() {
        let media = RecordingMedia::new();
        let src = load_track(&media, &music("7", "3"), 0.4, "/music");
        assert_eq!(src.as_deref(), Some("/music/7/03.mp3"));
        assert_eq!(media.src().as_deref(), Some("/music/7/03.mp3"));
        assert_eq!(
            media.calls(),
            vec![
                MediaCall::SetSource("/music/7/03.mp3".to_string()),
                MediaCall::SetVolume(0.4),
                MediaCall::Play,
            ]
        );
        assert!(!media.paused());
    }

    #[test]
    fn no_song_leaves_media_untouched() {
        let media = RecordingMedia::new();
        assert_eq!(load_track(&media, &CurrentMusic::default(), 1.0, "/music"), None);
        assert!(media.calls().is_empty());
    }

    #[test]
    fn play_flag_drives_play_and_pause() {
        let media = RecordingMedia::new();
        media.set_source("/music/1/01.mp3").unwrap();
        media.clear_calls();

        apply_play_state(&media, true);
        assert!(!media.paused());
        apply_play_state(&media, false);
        assert!(media.paused());
        assert_eq!(media.calls(), vec![MediaCall::Play, MediaCall::Pause]);
    }

    #[test]
    fn rejected_play_is_swallowed() {
        let media = MemoryMedia::new();
        apply_play_state(&media, true);
        assert!(media.paused());
    }

    #[test]
    fn volume_is_forwarded() {
        let media = MemoryMedia::new();
        apply_volume(&media, 0.25);
        assert_eq!(media.volume(), 0.25);
    }
}
