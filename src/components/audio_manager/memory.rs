use super::media::{MediaElement, TimeUpdateCallback, TimeUpdateSubscription};
use crate::error::{MediaError, MediaResult};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct MemoryState {
    src: Option<String>,
    volume: f64,
    current_time: f64,
    duration: Option<f64>,
    paused: bool,
    next_listener: u64,
    listeners: Vec<(u64, Rc<RefCell<TimeUpdateCallback>>)>,
}

/// Playback element that lives entirely in process memory.
///
/// Used where no browser audio element exists. Nothing is decoded and the
/// position only moves on seek or source change.
#[derive(Clone)]
pub struct MemoryMedia {
    state: Rc<RefCell<MemoryState>>,
}

impl Default for MemoryMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryMedia {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                volume: 1.0,
                paused: true,
                ..Default::default()
            })),
        }
    }

    fn emit_time_update(&self) {
        let (time, listeners) = {
            let state = self.state.borrow();
            let listeners: Vec<_> = state.listeners.iter().map(|(_, cb)| cb.clone()).collect();
            (state.current_time, listeners)
        };
        for listener in listeners {
            let mut callback = listener.borrow_mut();
            (*callback)(time);
        }
    }
}

#[cfg(test)]
impl MemoryMedia {
    pub fn src(&self) -> Option<String> {
        self.state.borrow().src.clone()
    }

    pub fn volume(&self) -> f64 {
        self.state.borrow().volume
    }

    pub fn paused(&self) -> bool {
        self.state.borrow().paused
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    pub fn set_duration(&self, duration: Option<f64>) {
        self.state.borrow_mut().duration = duration;
    }

    /// Move the position forward as if playback ran for `seconds`.
    pub fn advance(&self, seconds: f64) {
        {
            let mut state = self.state.borrow_mut();
            let next = state.current_time + seconds.max(0.0);
            state.current_time = match state.duration {
                Some(d) => next.min(d),
                None => next,
            };
        }
        self.emit_time_update();
    }
}

impl MediaElement for MemoryMedia {
    fn play(&self) -> MediaResult<()> {
        let mut state = self.state.borrow_mut();
        if state.src.is_none() {
            return Err(MediaError::PlaybackRejected("no source loaded".to_string()));
        }
        state.paused = false;
        Ok(())
    }

    fn pause(&self) -> MediaResult<()> {
        self.state.borrow_mut().paused = true;
        Ok(())
    }

    fn set_source(&self, src: &str) -> MediaResult<()> {
        if src.trim().is_empty() {
            return Err(MediaError::InvalidSource {
                src: src.to_string(),
                reason: "empty url".to_string(),
            });
        }
        {
            let mut state = self.state.borrow_mut();
            state.src = Some(src.to_string());
            state.current_time = 0.0;
            state.duration = None;
            // A new source loads paused.
            state.paused = true;
        }
        self.emit_time_update();
        Ok(())
    }

    fn set_volume(&self, volume: f64) {
        self.state.borrow_mut().volume = volume.clamp(0.0, 1.0);
    }

    fn seek(&self, position: f64) {
        {
            let mut state = self.state.borrow_mut();
            let position = position.max(0.0);
            state.current_time = match state.duration {
                Some(d) => position.min(d),
                None => position,
            };
        }
        self.emit_time_update();
    }

    fn current_time(&self) -> f64 {
        self.state.borrow().current_time
    }

    fn duration(&self) -> Option<f64> {
        self.state.borrow().duration
    }

    fn on_time_update(&self, callback: TimeUpdateCallback) -> MediaResult<TimeUpdateSubscription> {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_listener;
            state.next_listener += 1;
            state.listeners.push((id, Rc::new(RefCell::new(callback))));
            id
        };
        let weak = Rc::downgrade(&self.state);
        Ok(TimeUpdateSubscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        }))
    }
}

/// Operations applied through a [`RecordingMedia`], in call order.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCall {
    Play,
    Pause,
    SetSource(String),
    SetVolume(f64),
    Seek(f64),
}

/// [`MemoryMedia`] that also logs every call made on it.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct RecordingMedia {
    inner: MemoryMedia,
    calls: Rc<RefCell<Vec<MediaCall>>>,
}

#[cfg(test)]
impl RecordingMedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<MediaCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: MediaCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[cfg(test)]
impl std::ops::Deref for RecordingMedia {
    type Target = MemoryMedia;

    fn deref(&self) -> &MemoryMedia {
        &self.inner
    }
}

#[cfg(test)]
impl MediaElement for RecordingMedia {
    fn play(&self) -> MediaResult<()> {
        self.record(MediaCall::Play);
        self.inner.play()
    }

    fn pause(&self) -> MediaResult<()> {
        self.record(MediaCall::Pause);
        self.inner.pause()
    }

    fn set_source(&self, src: &str) -> MediaResult<()> {
        self.record(MediaCall::SetSource(src.to_string()));
        self.inner.set_source(src)
    }

    fn set_volume(&self, volume: f64) {
        self.record(MediaCall::SetVolume(volume));
        self.inner.set_volume(volume);
    }

    fn seek(&self, position: f64) {
        self.record(MediaCall::Seek(position));
        self.inner.seek(position);
    }

    fn current_time(&self) -> f64 {
        self.inner.current_time()
    }

    fn duration(&self) -> Option<f64> {
        self.inner.duration()
    }

    fn on_time_update(&self, callback: TimeUpdateCallback) -> MediaResult<TimeUpdateSubscription> {
        self.inner.on_time_update(callback)
    }
}
