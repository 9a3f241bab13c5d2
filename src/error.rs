//! Error types for media playback and library loading

use thiserror::Error;

/// Failures reported by a media backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    /// No audio element could be created or found
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("audio element unavailable")]
    Unavailable,

    /// The backend refused to start playback
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),

    /// The source could not be assigned
    #[error("invalid source {src}: {reason}")]
    InvalidSource { src: String, reason: String },

    /// Attaching or removing an event listener failed
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("listener error: {0}")]
    Listener(String),
}

#[cfg(target_arch = "wasm32")]
impl MediaError {
    /// Best-effort text for a rejected JS call.
    pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
        value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"))
    }
}

pub type MediaResult<T> = std::result::Result<T, MediaError>;

/// Failures while reading the bundled library.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("malformed library: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("playlist {0} has no songs")]
    EmptyPlaylist(String),
}
