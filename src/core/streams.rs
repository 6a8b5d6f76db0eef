//! Stream and player data structures

use serde::{Deserialize, Serialize};

/// A playable video-only stream variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStream {
    /// Direct media URL
    pub url: String,
    /// Bitrate in bits per second
    pub bitrate: i64,
    /// Quality label (e.g., "720p", "1080p")
    pub quality: String,
}

/// A playable audio-only stream variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStream {
    /// Direct media URL
    pub url: String,
    /// Bitrate in bits per second
    pub bitrate: i64,
    /// BCP-47-ish language code, "und" when undetermined
    pub language: String,
    /// Human-readable track name
    pub name: String,
    /// Whether the upstream marks this track as the default
    pub is_default: bool,
}

impl AudioStream {
    /// Language code for tracks not matched to an audio-track record
    pub const UNDETERMINED: &'static str = "und";

    /// Display name for tracks not matched to an audio-track record
    pub const ORIGINAL_NAME: &'static str = "Original";
}

/// Resolved player data for a single video
///
/// `videos` is ordered by descending bitrate with at most one entry per
/// quality label. `audios` holds track-matched streams in upstream track
/// order, followed by unmatched streams by descending bitrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerData {
    /// Video title
    pub title: String,
    /// Best known thumbnail URL, attached after the existence probe
    pub thumbnail_url: Option<String>,
    /// Deduplicated video streams, descending bitrate
    pub videos: Vec<VideoStream>,
    /// Deduplicated audio streams
    pub audios: Vec<AudioStream>,
}

/// A resolved (video, audio) pair or a standalone audio choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamSelection {
    /// Video stream paired with an audio track
    Video {
        video: VideoStream,
        audio: AudioStream,
    },
    /// Audio track only
    Audio { audio: AudioStream },
}

impl StreamSelection {
    /// The audio stream of either variant
    pub fn audio(&self) -> &AudioStream {
        match self {
            StreamSelection::Video { audio, .. } => audio,
            StreamSelection::Audio { audio } => audio,
        }
    }

    /// The video stream, if this is a video selection
    pub fn video(&self) -> Option<&VideoStream> {
        match self {
            StreamSelection::Video { video, .. } => Some(video),
            StreamSelection::Audio { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio() -> AudioStream {
        AudioStream {
            url: "http://example.com/a".to_string(),
            bitrate: 128000,
            language: "en".to_string(),
            name: "English".to_string(),
            is_default: true,
        }
    }

    fn video() -> VideoStream {
        VideoStream {
            url: "http://example.com/v".to_string(),
            bitrate: 3000000,
            quality: "1080p".to_string(),
        }
    }

    #[test]
    fn test_selection_accessors() {
        let selection = StreamSelection::Video {
            video: video(),
            audio: audio(),
        };
        assert_eq!(selection.video(), Some(&video()));
        assert_eq!(selection.audio(), &audio());

        let audio_only = StreamSelection::Audio { audio: audio() };
        assert_eq!(audio_only.video(), None);
        assert_eq!(audio_only.audio(), &audio());
    }
}
