use crate::components::{Icon, IconKind};
use crate::store::{next_song, prev_song, toggle_play, PlayerStore};
use dioxus::prelude::*;

const DISABLED_CLASS: &str = "opacity-50 cursor-not-allowed";

fn transport_class(base: &str, enabled: bool) -> String {
    if enabled {
        base.to_string()
    } else {
        format!("{base} {DISABLED_CLASS}")
    }
}

#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut store = use_context::<PlayerStore>();
    let loaded = store.current_music.read().is_loaded();
    let playing = (store.is_playing)();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            title: "Play / Pause",
            disabled: !loaded,
            class: transport_class("bg-white text-black rounded-full p-2", loaded),
            onclick: move |_| toggle_play(&mut store),
            Icon {
                kind: if playing { IconKind::Pause } else { IconKind::Play },
                class: "w-5 h-5".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let mut store = use_context::<PlayerStore>();
    let loaded = store.current_music.read().is_loaded();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            title: "Prev",
            disabled: !loaded,
            class: transport_class("text-zinc-300 hover:text-white transition-colors", loaded),
            onclick: move |_| {
                prev_song(&mut store);
            },
            Icon { kind: IconKind::Prev, class: "w-5 h-5".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let mut store = use_context::<PlayerStore>();
    let loaded = store.current_music.read().is_loaded();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            title: "Next",
            disabled: !loaded,
            class: transport_class("text-zinc-300 hover:text-white transition-colors", loaded),
            onclick: move |_| {
                next_song(&mut store);
            },
            Icon { kind: IconKind::Next, class: "w-5 h-5".to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_controls_get_dimmed() {
        assert_eq!(transport_class("p-2", true), "p-2");
        assert_eq!(transport_class("p-2", false), "p-2 opacity-50 cursor-not-allowed");
    }
}
