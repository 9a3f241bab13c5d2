use crate::api::{Library, PlaylistEntry};
use crate::components::audio_manager::platform_media;
use crate::components::{Icon, IconKind, Player};
use crate::store::{use_player_store, PlaybackStore, PlayerStore};
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let library = use_hook(|| match Library::bundled() {
        Ok(library) => Some(library),
        Err(err) => {
            tracing::warn!(%err, "bundled library unavailable");
            None
        }
    });
    let config = library
        .as_ref()
        .map(|l| l.config.clone())
        .unwrap_or_default();

    use_context_provider(|| config.clone());
    use_context_provider(platform_media);
    use_player_store(config.initial_volume);

    let playlists = library.map(|l| l.playlists).unwrap_or_default();

    rsx! {
        div { class: "min-h-screen bg-zinc-950 text-white flex flex-col",
            main { class: "flex-1 overflow-y-auto px-6 py-8 pb-32 space-y-8",
                if playlists.is_empty() {
                    p { class: "text-sm text-zinc-500", "No playlists available" }
                }
                for entry in playlists {
                    PlaylistSection { key: "{entry.playlist.id}", entry: entry.clone() }
                }
            }
            footer { class: "fixed bottom-0 left-0 right-0 bg-zinc-950/90 border-t border-zinc-800/60 px-4 py-2",
                Player {}
            }
        }
    }
}

#[component]
fn PlaylistSection(entry: PlaylistEntry) -> Element {
    let mut store = use_context::<PlayerStore>();
    let current = (store.current_music)();
    let active_playlist = current.playlist.as_ref().map(|p| p.id.clone());
    let active_song = current.song.as_ref().map(|s| s.id.clone());
    let is_this_playlist = active_playlist.as_deref() == Some(entry.playlist.id.as_str());

    rsx! {
        section { class: "space-y-3",
            h2 { class: "text-xl font-bold", "{entry.playlist.title}" }
            ul { class: "divide-y divide-zinc-800/60",
                for song in entry.songs.iter().cloned() {
                    li { key: "{song.id}",
                        button {
                            r#type: "button",
                            class: if is_this_playlist && active_song.as_deref() == Some(song.id.as_str()) { "w-full flex items-center gap-3 py-2 text-left text-emerald-400" } else { "w-full flex items-center gap-3 py-2 text-left text-zinc-200 hover:text-white" },
                            onclick: {
                                let entry = entry.clone();
                                let song = song.clone();
                                move |_| {
                                    if let Some(music) = entry.context_for(&song.id) {
                                        tracing::debug!(playlist_id = %entry.playlist.id, song_id = %song.id, "song picked");
                                        store.set_current_music(music);
                                        store.set_is_playing(true);
                                    }
                                }
                            },
                            Icon { kind: IconKind::Play, class: "w-4 h-4".to_string() }
                            span { class: "flex-1 truncate", "{song.title}" }
                            span { class: "text-xs text-zinc-500", {song.artist_line()} }
                            span { class: "text-xs text-zinc-500 w-10 text-right",
                                {song.duration.clone().unwrap_or_default()}
                            }
                        }
                    }
                }
            }
        }
    }
}
