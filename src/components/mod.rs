//! The components module contains all shared components for our app.

mod app;
pub mod audio_manager;
mod icons;
mod player;
mod slider;
mod volume_control;

pub use app::*;
pub use icons::*;
pub use player::*;
pub use slider::*;
pub use volume_control::*;
