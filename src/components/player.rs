use crate::components::audio_manager::{
    apply_play_state, apply_volume, defer_signal_update, load_track, MediaHandle,
};
use crate::components::VolumeControl;
use crate::config::PlayerConfig;
use crate::store::{PlaybackStore, PlayerStore};
use dioxus::prelude::*;

mod controls;
mod current_song;
mod song_control;

use controls::{NextButton, PlayPauseButton, PrevButton};
use current_song::CurrentSong;
use song_control::SongControl;

#[component]
pub fn Player() -> Element {
    let store = use_context::<PlayerStore>();
    let media = use_context::<MediaHandle>();
    let config = use_context::<PlayerConfig>();

    // Play/pause follows the store flag.
    {
        let media = media.clone();
        use_effect(move || {
            let playing = (store.is_playing)();
            apply_play_state(&*media, playing);
        });
    }

    {
        let media = media.clone();
        use_effect(move || {
            let volume = (store.volume)();
            apply_volume(&*media, volume);
        });
    }

    // Track change: load and start the new song. Volume is peeked so this
    // only re-runs when current_music changes.
    {
        let media = media.clone();
        let media_root = config.media_root.clone();
        use_effect(move || {
            let music = (store.current_music)();
            let volume = *store.volume.peek();
            if load_track(&*media, &music, volume, &media_root).is_some()
                && !*store.is_playing.peek()
            {
                let mut store = store;
                defer_signal_update(move || store.set_is_playing(true));
            }
        });
    }

    let current = (store.current_music)();
    let song = current.song.clone();

    rsx! {
        div { class: "flex flex-row justify-between w-full z-50 items-center mt-2",
            div { class: "w-[250px]",
                CurrentSong {
                    image: song.as_ref().and_then(|s| s.image.clone()),
                    title: song.as_ref().map(|s| s.title.clone()).unwrap_or_default(),
                    artists: song.as_ref().map(|s| s.artists.clone()),
                }
            }
            div { class: "grid place-content-center gap-4 flex-1",
                div { class: "flex justify-center flex-col items-center",
                    div { class: "flex gap-8",
                        PrevButton {}
                        PlayPauseButton {}
                        NextButton {}
                    }
                    SongControl {}
                }
            }
            div { class: "grid place-content-center",
                VolumeControl {}
            }
        }
    }
}
