//! Adaptive format parsing
//!
//! Turns the raw streaming-data block of a player response into a
//! quality-deduplicated video list and a language-tagged audio list. Pure and
//! deterministic; descriptors with missing fields or unknown itags are
//! expected upstream noise and skipped silently.

use crate::core::streams::{AudioStream, VideoStream};
use crate::platform::innertube::{CaptionTrack, Captions, StreamingData};

/// Map an itag to its quality label. Unrecognized itags have no label and
/// their descriptors are dropped.
pub fn quality_for_itag(itag: u32) -> Option<&'static str> {
    match itag {
        160 | 278 | 330 | 394 | 694 => Some("144p"),
        133 | 242 | 331 | 395 | 695 => Some("240p"),
        134 | 243 | 332 | 396 | 696 => Some("360p"),
        135 | 244 | 333 | 397 | 697 => Some("480p"),
        136 | 247 | 298 | 302 | 334 | 398 | 698 => Some("720p"),
        137 | 299 | 248 | 303 | 335 | 399 | 699 => Some("1080p"),
        264 | 271 | 304 | 308 | 336 | 400 | 700 => Some("1440p"),
        266 | 305 | 313 | 315 | 337 | 401 | 701 => Some("2160p"),
        138 | 272 | 402 | 571 => Some("4320p"),
        _ => None,
    }
}

/// Audio candidate surviving itag dedup, not yet matched to a track record
#[derive(Debug, Clone)]
struct AudioCandidate {
    url: String,
    bitrate: i64,
}

/// Parse the adaptive formats of a streaming-data block into deduplicated
/// video and audio stream lists.
///
/// Videos keep the highest-bitrate descriptor per quality label (first seen
/// wins ties) and come out sorted by descending bitrate. Audio candidates are
/// keyed by itag with last-write-wins, then matched against the audio-track
/// records of the captions block: matched tracks keep track order and inherit
/// language and display name, unmatched candidates follow as "und"/"Original"
/// by descending bitrate.
pub fn parse_streams(
    streaming_data: &StreamingData,
    captions: Option<&Captions>,
) -> (Vec<VideoStream>, Vec<AudioStream>) {
    let Some(formats) = &streaming_data.adaptive_formats else {
        return (Vec::new(), Vec::new());
    };

    let mut videos: Vec<VideoStream> = Vec::new();
    let mut audio_pool: Vec<(u32, AudioCandidate)> = Vec::new();

    for format in formats {
        let Some(url) = format.url.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        let (Some(bitrate), Some(itag)) = (format.bitrate, format.itag) else {
            continue;
        };
        let mime_type = format.mime_type.as_deref().unwrap_or("");

        if mime_type.contains("video/") {
            let Some(quality) = quality_for_itag(itag) else {
                continue;
            };
            match videos.iter_mut().find(|v| v.quality == quality) {
                Some(existing) => {
                    // Strictly greater: equal-bitrate entries keep the first seen
                    if bitrate > existing.bitrate {
                        existing.url = url.to_string();
                        existing.bitrate = bitrate;
                    }
                }
                None => videos.push(VideoStream {
                    url: url.to_string(),
                    bitrate,
                    quality: quality.to_string(),
                }),
            }
        } else if mime_type.contains("audio/") {
            let candidate = AudioCandidate {
                url: url.to_string(),
                bitrate,
            };
            match audio_pool.iter_mut().find(|(code, _)| *code == itag) {
                // Last write wins regardless of bitrate, unlike video dedup
                Some((_, existing)) => *existing = candidate,
                None => audio_pool.push((itag, candidate)),
            }
        }
    }

    videos.sort_by(|a, b| b.bitrate.cmp(&a.bitrate));

    let mut audios = Vec::new();
    for track in audio_tracks(captions) {
        let Some(itag) = track_itag(track) else {
            continue;
        };
        let Some(position) = audio_pool.iter().position(|(code, _)| *code == itag) else {
            continue;
        };
        let (_, candidate) = audio_pool.remove(position);
        let language = track
            .language_code
            .clone()
            .unwrap_or_else(|| AudioStream::UNDETERMINED.to_string());
        let name = track.display_name.clone().unwrap_or_else(|| language.clone());
        audios.push(AudioStream {
            url: candidate.url,
            bitrate: candidate.bitrate,
            language,
            name,
            is_default: track.audio_is_default,
        });
    }

    audio_pool.sort_by(|a, b| b.1.bitrate.cmp(&a.1.bitrate));
    for (_, candidate) in audio_pool {
        audios.push(AudioStream {
            url: candidate.url,
            bitrate: candidate.bitrate,
            language: AudioStream::UNDETERMINED.to_string(),
            name: AudioStream::ORIGINAL_NAME.to_string(),
            is_default: false,
        });
    }

    (videos, audios)
}

fn audio_tracks(captions: Option<&Captions>) -> &[CaptionTrack] {
    captions
        .and_then(|c| c.player_captions_tracklist_renderer.as_ref())
        .map(|renderer| renderer.audio_tracks.as_slice())
        .unwrap_or(&[])
}

/// The itag encoded as the trailing dot-separated segment of the track ID
fn track_itag(track: &CaptionTrack) -> Option<u32> {
    track
        .audio_track_id
        .as_deref()
        .and_then(|id| id.rsplit('.').next())
        .and_then(|segment| segment.parse().ok())
}
