use crate::components::{Icon, IconKind};
use dioxus::prelude::*;

/// Artwork, title, and artist line for the active song.
#[component]
pub(super) fn CurrentSong(
    #[props(!optional)] image: Option<String>,
    title: String,
    #[props(!optional)] artists: Option<Vec<String>>,
) -> Element {
    let artist_line = artists.map(|a| a.join(", ")).unwrap_or_default();

    rsx! {
        div { class: "flex items-center gap-5 relative overflow-hidden",
            picture { class: "w-16 h-16 bg-zinc-800 rounded-lg shadow-lg overflow-hidden",
                {
                    match &image {
                        Some(src) => rsx! {
                            img { src: "{src}", alt: "{title}" }
                        },
                        None => rsx! {
                            div { class: "w-full h-full flex items-center justify-center",
                                Icon { kind: IconKind::Music, class: "w-6 h-6 text-zinc-600".to_string() }
                            }
                        },
                    }
                }
            }
            div { class: "flex flex-col",
                h3 { class: "font-semibold text-sm block", "{title}" }
                span { class: "text-xs opacity-80", "{artist_line}" }
            }
        }
    }
}
