//! Utility helpers for tunebar

use crate::api::models::{Playlist, Song};

/// Format a playback position as `m:ss`. Unknown positions render as `0:00`.
pub fn format_time(time: Option<f64>) -> String {
    let Some(time) = time.filter(|t| t.is_finite() && *t >= 0.0) else {
        return "0:00".to_string();
    };
    let minutes = (time / 60.0).floor() as u64;
    let seconds = (time % 60.0).floor() as u64;
    format!("{minutes}:{seconds:02}")
}

/// Build the audio URL for a song: `{root}/{playlist_id}/0{song_id}.mp3`.
///
/// The literal `0` assumes single-digit song ids; the served files are named
/// that way. A missing playlist renders as `undefined`.
pub fn media_source_path(media_root: &str, playlist: Option<&Playlist>, song: &Song) -> String {
    let playlist_id = playlist.map(|p| p.id.as_str()).unwrap_or("undefined");
    format!("{media_root}/{playlist_id}/0{}.mp3", song.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(Some(0.0)), "0:00");
        assert_eq!(format_time(Some(5.7)), "0:05");
        assert_eq!(format_time(Some(65.0)), "1:05");
        assert_eq!(format_time(Some(600.0)), "10:00");
        assert_eq!(format_time(Some(3725.9)), "62:05");
    }

    #[test]
    fn unknown_time_is_zero() {
        assert_eq!(format_time(None), "0:00");
        assert_eq!(format_time(Some(f64::NAN)), "0:00");
        assert_eq!(format_time(Some(f64::INFINITY)), "0:00");
        assert_eq!(format_time(Some(-3.0)), "0:00");
    }

    #[test]
    fn source_path_keeps_zero_prefix() {
        let playlist = Playlist {
            id: "7".to_string(),
            ..Default::default()
        };
        let song = Song {
            id: "3".to_string(),
            ..Default::default()
        };
        assert_eq!(
            media_source_path("/music", Some(&playlist), &song),
            "/music/7/03.mp3"
        );
    }

    #[test]
    fn source_path_without_playlist() {
        let song = Song {
            id: "1".to_string(),
            ..Default::default()
        };
        assert_eq!(media_source_path("/music", None, &song), "/music/undefined/01.mp3");
    }

    proptest! {
        #[test]
        fn matches_floor_arithmetic(t in 0.0f64..1.0e6) {
            let expected = format!("{}:{:02}", (t / 60.0).floor() as u64, (t % 60.0).floor() as u64);
            prop_assert_eq!(format_time(Some(t)), expected);
        }

        #[test]
        fn seconds_field_is_two_digits(t in 0.0f64..1.0e6) {
            let out = format_time(Some(t));
            let (_, secs) = out.split_once(':').unwrap();
            prop_assert_eq!(secs.len(), 2);
            prop_assert!(secs.parse::<u8>().unwrap() < 60);
        }
    }
}
