use crate::components::audio_manager::{MediaHandle, TimeUpdateCallback};
use crate::components::Slider;
use crate::utils::format_time;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;
use std::rc::Rc;

/// Elapsed time, seek slider, and track length.
///
/// Holds a time-update subscription for as long as it is mounted; the hook
/// value is dropped with the scope, which detaches the listener.
#[component]
pub(super) fn SongControl() -> Element {
    let media = use_context::<MediaHandle>();
    let current_time = use_signal(|| media.current_time());

    let _subscription = use_hook({
        let media = media.clone();
        move || {
            let runtime = Runtime::current();
            let mut current_time = current_time;
            let callback: TimeUpdateCallback = Box::new(move |time| {
                let _guard = RuntimeGuard::new(runtime.clone());
                current_time.set(time);
            });
            match media.on_time_update(callback) {
                Ok(subscription) => Some(Rc::new(subscription)),
                Err(err) => {
                    tracing::warn!(%err, "seek bar could not subscribe to time updates");
                    None
                }
            }
        }
    });

    let duration = media.duration().unwrap_or(0.0);
    let elapsed = format_time(Some(current_time()));
    let total = if duration > 0.0 {
        format_time(Some(duration))
    } else {
        "0:00".to_string()
    };

    rsx! {
        div { class: "flex gap-x-3 text-xs pt-2",
            span { class: "opacity-50 w-12 text-right", "{elapsed}" }
            Slider {
                value: current_time(),
                min: 0.0,
                max: duration,
                class: "w-[400px]".to_string(),
                on_value_change: move |time: f64| media.seek(time),
            }
            span { class: "opacity-50 w-12", "{total}" }
        }
    }
}
