use crate::error::MediaResult;

pub type TimeUpdateCallback = Box<dyn FnMut(f64)>;

/// Capabilities the player needs from a playback element.
///
/// Methods take `&self`: backends are handles onto an element owned
/// elsewhere (the DOM, or shared in-process state).
pub trait MediaElement {
    fn play(&self) -> MediaResult<()>;
    fn pause(&self) -> MediaResult<()>;
    fn set_source(&self, src: &str) -> MediaResult<()>;
    fn set_volume(&self, volume: f64);
    /// Jump to `position` seconds.
    fn seek(&self, position: f64);
    fn current_time(&self) -> f64;
    /// Track length in seconds, `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;
    /// Register for position updates. The listener stays attached until the
    /// returned subscription is dropped.
    fn on_time_update(&self, callback: TimeUpdateCallback) -> MediaResult<TimeUpdateSubscription>;
}

/// Guard for a time-update listener; dropping it detaches the listener.
#[must_use = "dropping the subscription detaches the listener"]
pub struct TimeUpdateSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl TimeUpdateSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for TimeUpdateSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
