//! # ytplay - Play YouTube videos in mpv
//!
//! Resolves a YouTube URL or video ID into playable stream URLs, selects one
//! (video, audio) pair from explicit or interactive preferences, and hands
//! the selection to an external mpv process.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ytplay::platform::InnerTubeClient;
//! use ytplay::utils::url::extract_video_id;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ytplay::PlayError> {
//!     let video_id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").unwrap();
//!     let data = InnerTubeClient::new().fetch_player_data(&video_id).await?;
//!     println!("{}: {} video streams", data.title, data.videos.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod platform;
pub mod player;
pub mod utils;

// Re-export main types
pub use core::{
    select_stream, AudioStream, PlayerData, SelectionPrefs, StaticLanguageNames, StreamSelection,
    VideoStream,
};
pub use error::PlayError;
pub use platform::InnerTubeClient;

/// Result type alias for ytplay operations
pub type Result<T> = std::result::Result<T, PlayError>;
