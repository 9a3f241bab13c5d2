use crate::components::{Icon, IconKind, Slider};
use crate::store::{PlaybackStore, PlayerStore};
use dioxus::prelude::*;

const DEFAULT_UNMUTE_LEVEL: f64 = 1.0;

/// Volume slider with a mute toggle. Reads and writes the store's volume;
/// the player applies it to the media element.
#[component]
pub fn VolumeControl() -> Element {
    let mut store = use_context::<PlayerStore>();
    let mut previous = use_signal(|| DEFAULT_UNMUTE_LEVEL);

    let volume = (store.volume)();
    let muted = volume <= 0.0;

    let on_toggle_mute = move |_| {
        let current = store.volume();
        if current > 0.0 {
            previous.set(current);
            store.set_volume(0.0);
        } else {
            let restore = *previous.peek();
            store.set_volume(if restore > 0.0 { restore } else { DEFAULT_UNMUTE_LEVEL });
        }
    };

    rsx! {
        div { class: "flex justify-center gap-x-2 text-white",
            button {
                r#type: "button",
                title: if muted { "Unmute" } else { "Mute" },
                class: "opacity-70 hover:opacity-100 transition",
                onclick: on_toggle_mute,
                Icon {
                    kind: if muted { IconKind::VolumeMuted } else { IconKind::Volume },
                    class: "w-5 h-5".to_string(),
                }
            }
            Slider {
                value: (volume * 100.0).round(),
                min: 0.0,
                max: 100.0,
                class: "w-[95px]".to_string(),
                on_value_change: move |percent: f64| {
                    store.set_volume(percent / 100.0);
                },
            }
        }
    }
}
