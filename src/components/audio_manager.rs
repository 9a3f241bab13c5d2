//! Audio Manager - owns the playback element and keeps it in step with the store.
//! Components talk to [`MediaElement`] through a [`MediaHandle`] from context;
//! the concrete backend is picked per target.

use dioxus::prelude::*;
use std::ops::Deref;
use std::rc::Rc;

mod media;
mod memory;
mod sync;
#[cfg(target_arch = "wasm32")]
mod web;

pub use media::{MediaElement, TimeUpdateCallback};
pub use memory::MemoryMedia;
#[cfg(test)]
pub use memory::{MediaCall, RecordingMedia};
pub use sync::{apply_play_state, apply_volume, load_track};
#[cfg(target_arch = "wasm32")]
pub use web::WebAudioMedia;

/// Shared handle to the widget's single playback element.
#[derive(Clone)]
pub struct MediaHandle(Rc<dyn MediaElement>);

impl MediaHandle {
    pub fn new(media: impl MediaElement + 'static) -> Self {
        Self(Rc::new(media))
    }
}

impl Deref for MediaHandle {
    type Target = dyn MediaElement;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for MediaHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Backend for this target: the page's `<audio>` element on the web, an
/// in-process element elsewhere.
#[cfg(target_arch = "wasm32")]
pub fn platform_media() -> MediaHandle {
    match WebAudioMedia::attach() {
        Ok(media) => MediaHandle::new(media),
        Err(err) => {
            tracing::warn!(%err, "falling back to detached media element");
            MediaHandle::new(MemoryMedia::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_media() -> MediaHandle {
    MediaHandle::new(MemoryMedia::new())
}

/// Run a signal write after the current effect pass has finished.
#[cfg(target_arch = "wasm32")]
pub fn defer_signal_update<F>(f: F)
where
    F: FnOnce() + 'static,
{
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        f();
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn defer_signal_update<F>(f: F)
where
    F: FnOnce() + 'static,
{
    spawn(async move {
        f();
    });
}
