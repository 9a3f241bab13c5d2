pub mod library;
pub mod models;

pub use library::{Library, PlaylistEntry};
