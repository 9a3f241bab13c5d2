use super::media::{MediaElement, TimeUpdateCallback, TimeUpdateSubscription};
use crate::error::{MediaError, MediaResult};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlAudioElement};

const AUDIO_ELEMENT_ID: &str = "tunebar-audio";

/// The page's `<audio>` element.
pub struct WebAudioMedia {
    audio: HtmlAudioElement,
}

impl WebAudioMedia {
    /// Reuse the player's audio element, creating it on first use.
    pub fn attach() -> MediaResult<Self> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(MediaError::Unavailable)?;

        if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
            let audio = existing
                .dyn_into::<HtmlAudioElement>()
                .map_err(|_| MediaError::Unavailable)?;
            return Ok(Self { audio });
        }

        let audio: HtmlAudioElement = document
            .create_element("audio")
            .ok()
            .and_then(|el| el.dyn_into().ok())
            .ok_or(MediaError::Unavailable)?;
        audio.set_id(AUDIO_ELEMENT_ID);
        audio
            .set_attribute("preload", "metadata")
            .map_err(|_| MediaError::Unavailable)?;
        document
            .body()
            .ok_or(MediaError::Unavailable)?
            .append_child(&audio)
            .map_err(|_| MediaError::Unavailable)?;

        tracing::debug!(id = AUDIO_ELEMENT_ID, "created audio element");
        Ok(Self { audio })
    }
}

impl MediaElement for WebAudioMedia {
    fn play(&self) -> MediaResult<()> {
        let promise = self
            .audio
            .play()
            .map_err(|e| MediaError::PlaybackRejected(MediaError::describe_js(&e)))?;
        // Autoplay policy and load failures surface as a rejected promise.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                let err = MediaError::PlaybackRejected(MediaError::describe_js(&e));
                tracing::warn!(%err, "audio play() rejected");
            }
        });
        Ok(())
    }

    fn pause(&self) -> MediaResult<()> {
        self.audio
            .pause()
            .map_err(|e| MediaError::PlaybackRejected(MediaError::describe_js(&e)))
    }

    fn set_source(&self, src: &str) -> MediaResult<()> {
        if src.trim().is_empty() {
            return Err(MediaError::InvalidSource {
                src: src.to_string(),
                reason: "empty url".to_string(),
            });
        }
        self.audio.set_src(src);
        Ok(())
    }

    fn set_volume(&self, volume: f64) {
        self.audio.set_volume(volume.clamp(0.0, 1.0));
    }

    fn seek(&self, position: f64) {
        self.audio.set_current_time(position.max(0.0));
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn duration(&self) -> Option<f64> {
        let d = self.audio.duration();
        d.is_finite().then_some(d)
    }

    fn on_time_update(&self, callback: TimeUpdateCallback) -> MediaResult<TimeUpdateSubscription> {
        let mut callback = callback;
        let reader = self.audio.clone();
        let listener = Closure::wrap(
            Box::new(move || callback(reader.current_time())) as Box<dyn FnMut()>
        );
        self.audio
            .add_event_listener_with_callback("timeupdate", listener.as_ref().unchecked_ref())
            .map_err(|e| MediaError::Listener(MediaError::describe_js(&e)))?;

        let audio = self.audio.clone();
        Ok(TimeUpdateSubscription::new(move || {
            if let Err(e) = audio
                .remove_event_listener_with_callback("timeupdate", listener.as_ref().unchecked_ref())
            {
                let err = MediaError::Listener(MediaError::describe_js(&e));
                tracing::warn!(%err, "failed to detach timeupdate listener");
            }
            drop(listener);
        }))
    }
}
