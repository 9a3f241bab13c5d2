use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Play,
    Pause,
    Prev,
    Next,
    Volume,
    VolumeMuted,
    Music,
}

impl IconKind {
    fn path(self) -> &'static str {
        match self {
            IconKind::Play => "M6 4l14 8-14 8z",
            IconKind::Pause => "M6 4h4v16H6zM14 4h4v16h-4z",
            IconKind::Prev => "M19 20L9 12l10-8zM5 5h2v14H5z",
            IconKind::Next => "M5 4l10 8-10 8zM17 5h2v14h-2z",
            IconKind::Volume => "M11 5L6 9H2v6h4l5 4zM15.5 8.5a5 5 0 0 1 0 7M19 5a10 10 0 0 1 0 14",
            IconKind::VolumeMuted => "M11 5L6 9H2v6h4l5 4zM23 9l-6 6M17 9l6 6",
            IconKind::Music => "M9 18V5l12-2v13M9 18a3 3 0 1 1-6 0 3 3 0 0 1 6 0zM21 16a3 3 0 1 1-6 0 3 3 0 0 1 6 0z",
        }
    }

    fn filled(self) -> bool {
        matches!(self, IconKind::Play | IconKind::Pause | IconKind::Prev | IconKind::Next)
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default)] class: String) -> Element {
    let (fill, stroke) = if kind.filled() {
        ("currentColor", "none")
    } else {
        ("none", "currentColor")
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: fill,
            stroke: stroke,
            stroke_width: "2",
            path { d: kind.path() }
        }
    }
}
