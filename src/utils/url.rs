//! URL utilities for extracting video IDs from video platform URLs

use regex::Regex;
use std::sync::LazyLock;

static VIDEO_ID_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("static regex"));

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|youtu\.be/|/shorts/|/embed/|/live/|/v/)([a-zA-Z0-9_-]{11})")
        .expect("static regex")
});

/// Extract an 11-character video ID from a bare ID or any of the supported
/// URL shapes (`watch?v=`, `youtu.be/`, `/shorts/`, `/embed/`, `/live/`,
/// `/v/`). Returns `None` when no valid ID is found.
///
/// Pure string operation, safe to run as upfront validation before any I/O.
pub fn extract_video_id(identifier: &str) -> Option<String> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }

    if VIDEO_ID_FORMAT.is_match(identifier) {
        return Some(identifier.to_string());
    }

    VIDEO_URL
        .captures(identifier)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id_is_identity() {
        assert_eq!(
            extract_video_id("dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("  dQw4w9WgXcQ  ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(extract_video_id("a-b_c-d_e-f").as_deref(), Some("a-b_c-d_e-f"));
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s&list=PLx")
                .as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=42").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_path_shapes() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/brZCOVlyPPo").as_deref(),
            Some("brZCOVlyPPo")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/live/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/v/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("   "), None);
        assert_eq!(extract_video_id("tooshort"), None);
        assert_eq!(extract_video_id("waytoolongforanid"), None);
        assert_eq!(extract_video_id("https://example.com/watch"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/channel/UCxxx"), None);
        // Invalid character in the ID position
        assert_eq!(extract_video_id("dQw4w9WgXc!"), None);
    }
}
