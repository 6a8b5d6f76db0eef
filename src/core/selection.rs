//! Stream selection engine
//!
//! Turns a quality/language preference (or interactive input) into one
//! unambiguous stream pair. Decisions are pure and carry a structured reason;
//! presentation goes through the [`Prompter`] and [`LanguageNames`]
//! abstractions so the engine itself never touches the terminal or a locale
//! database.
//!
//! Preference strings never fail outright: an unmatched preference degrades
//! to a deterministic fallback with a warning. Only invalid interactive input
//! ends the run with nothing selected.

use crate::core::streams::{AudioStream, PlayerData, StreamSelection, VideoStream};
use tracing::{info, warn};

/// Quality/language preferences consumed by the selection engine
#[derive(Debug, Clone, Default)]
pub struct SelectionPrefs {
    /// Quality preference: "highest", "lowest", an exact label, or free text
    pub quality: Option<String>,
    /// Language preference: exact or prefix match on the language code
    pub language: Option<String>,
    /// Skip video selection entirely
    pub audio_only: bool,
}

/// A numbered menu handed to the interactive prompter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub heading: String,
    pub entries: Vec<String>,
    /// 0-based index used when the input line is empty
    pub default_index: usize,
}

/// Interactive input source. Renders a menu however it likes and returns the
/// raw input line; interpretation stays in the engine.
pub trait Prompter {
    fn read_choice(&mut self, menu: &Menu) -> String;
}

/// Injected locale-name lookup. `None` means the code is unrecognized and
/// callers fall back to the raw code.
pub trait LanguageNames {
    fn name_for(&self, code: &str) -> Option<String>;
}

/// Built-in lookup covering common primary language subtags
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticLanguageNames;

impl LanguageNames for StaticLanguageNames {
    fn name_for(&self, code: &str) -> Option<String> {
        let code = code.to_ascii_lowercase();
        let primary = code.split('-').next().unwrap_or(code.as_str());
        let name = match primary {
            "en" => "English",
            "es" => "Spanish",
            "fr" => "French",
            "de" => "German",
            "it" => "Italian",
            "pt" => "Portuguese",
            "ru" => "Russian",
            "ja" => "Japanese",
            "ko" => "Korean",
            "zh" => "Chinese",
            "hi" => "Hindi",
            "ar" => "Arabic",
            "tr" => "Turkish",
            "pl" => "Polish",
            "nl" => "Dutch",
            "sv" => "Swedish",
            "id" => "Indonesian",
            "vi" => "Vietnamese",
            "th" => "Thai",
            "uk" => "Ukrainian",
            _ => return None,
        };
        Some(name.to_string())
    }
}

/// Why a video stream was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoReason {
    /// Explicit interactive pick
    Interactive,
    /// Empty interactive input, defaulted to the highest entry
    InteractiveDefault,
    /// "highest" preference
    Highest,
    /// "lowest" preference
    Lowest,
    /// Exact quality-label match
    ExactMatch,
    /// Numerically closest label to the requested quality
    Closest { requested: u32 },
    /// Unparseable preference, degraded to the highest entry
    FallbackHighest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDecision {
    pub index: usize,
    pub reason: VideoReason,
}

/// Why an audio stream was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioReason {
    /// Single track, chosen unconditionally
    OnlyOption,
    /// Explicit interactive pick
    Interactive,
    /// Empty interactive input, defaulted to the default track
    InteractiveDefault,
    /// Exact language-code match
    ExactMatch,
    /// Language-code prefix match
    PrefixMatch,
    /// Unmatched preference, degraded to the default track
    FallbackDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDecision {
    pub index: usize,
    pub reason: AudioReason,
}

/// Select one (video, audio) pair or a standalone audio stream.
///
/// Returns `None` when the user declined or gave invalid interactive input;
/// that is a clean end of the run, not an error.
pub fn select_stream(
    data: &PlayerData,
    prefs: &SelectionPrefs,
    names: &dyn LanguageNames,
    prompter: &mut dyn Prompter,
) -> Option<StreamSelection> {
    let audio_only = prefs.audio_only || data.videos.is_empty();
    if audio_only && !prefs.audio_only {
        info!("No video streams available, defaulting to audio only");
    }

    let video = if audio_only {
        None
    } else {
        Some(select_video(&data.videos, prefs.quality.as_deref(), prompter)?)
    };

    let audio_decision = select_audio(&data.audios, prefs.language.as_deref(), names, prompter)?;
    let audio = data.audios[audio_decision.index].clone();

    Some(match video {
        Some(decision) => StreamSelection::Video {
            video: data.videos[decision.index].clone(),
            audio,
        },
        None => StreamSelection::Audio { audio },
    })
}

/// Pick a video stream from a non-empty descending-bitrate list
pub fn select_video(
    videos: &[VideoStream],
    quality_pref: Option<&str>,
    prompter: &mut dyn Prompter,
) -> Option<VideoDecision> {
    if videos.is_empty() {
        return None;
    }

    if let Some(pref) = quality_pref.map(str::trim).filter(|p| !p.is_empty()) {
        return Some(video_by_preference(videos, pref));
    }

    let menu = Menu {
        heading: "Select quality".to_string(),
        entries: video_menu_labels(videos),
        default_index: 0,
    };
    let (index, defaulted) = choose_from_menu(prompter, &menu)?;
    Some(VideoDecision {
        index,
        reason: if defaulted {
            VideoReason::InteractiveDefault
        } else {
            VideoReason::Interactive
        },
    })
}

/// Resolve a quality preference against the ordered video list. Total: every
/// preference string yields a decision, degrading with a warning when needed.
pub fn video_by_preference(videos: &[VideoStream], pref: &str) -> VideoDecision {
    if pref.eq_ignore_ascii_case("highest") {
        return VideoDecision {
            index: 0,
            reason: VideoReason::Highest,
        };
    }
    if pref.eq_ignore_ascii_case("lowest") {
        return VideoDecision {
            index: videos.len() - 1,
            reason: VideoReason::Lowest,
        };
    }
    if let Some(index) = videos
        .iter()
        .position(|v| v.quality.eq_ignore_ascii_case(pref))
    {
        return VideoDecision {
            index,
            reason: VideoReason::ExactMatch,
        };
    }

    let Some(requested) = quality_digits(pref) else {
        warn!(
            "Could not parse quality '{}', playing highest available ('{}')",
            pref, videos[0].quality
        );
        return VideoDecision {
            index: 0,
            reason: VideoReason::FallbackHighest,
        };
    };

    // Equidistant candidates keep whichever appears first in the
    // descending-bitrate ordering
    let mut best = 0;
    let mut best_distance = i64::MAX;
    for (index, video) in videos.iter().enumerate() {
        let label = quality_digits(&video.quality).unwrap_or(0);
        let distance = (i64::from(label) - i64::from(requested)).abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }

    warn!(
        "Quality '{}' not found, playing closest available ('{}')",
        pref, videos[best].quality
    );
    VideoDecision {
        index: best,
        reason: VideoReason::Closest { requested },
    }
}

/// Pick an audio stream from the ordered audio list
pub fn select_audio(
    audios: &[AudioStream],
    language_pref: Option<&str>,
    names: &dyn LanguageNames,
    prompter: &mut dyn Prompter,
) -> Option<AudioDecision> {
    if audios.is_empty() {
        return None;
    }
    if audios.len() == 1 {
        return Some(AudioDecision {
            index: 0,
            reason: AudioReason::OnlyOption,
        });
    }

    let default_index = default_audio_index(audios);

    if let Some(pref) = language_pref.map(str::trim).filter(|p| !p.is_empty()) {
        return Some(audio_by_preference(audios, pref, default_index));
    }

    let menu = Menu {
        heading: "Select audio track".to_string(),
        entries: audio_menu_labels(audios, names),
        default_index,
    };
    let (index, defaulted) = choose_from_menu(prompter, &menu)?;
    Some(AudioDecision {
        index,
        reason: if defaulted {
            AudioReason::InteractiveDefault
        } else {
            AudioReason::Interactive
        },
    })
}

/// Resolve a language preference: exact match, then prefix match, then the
/// default track with a warning. Never falls through to interactive choice.
pub fn audio_by_preference(
    audios: &[AudioStream],
    pref: &str,
    default_index: usize,
) -> AudioDecision {
    if let Some(index) = audios
        .iter()
        .position(|a| a.language.eq_ignore_ascii_case(pref))
    {
        return AudioDecision {
            index,
            reason: AudioReason::ExactMatch,
        };
    }

    let pref_lower = pref.to_lowercase();
    if let Some(index) = audios
        .iter()
        .position(|a| a.language.to_lowercase().starts_with(&pref_lower))
    {
        return AudioDecision {
            index,
            reason: AudioReason::PrefixMatch,
        };
    }

    warn!(
        "Audio language '{}' not found, using '{}' instead",
        pref, audios[default_index].language
    );
    AudioDecision {
        index: default_index,
        reason: AudioReason::FallbackDefault,
    }
}

/// The track to pre-select: the first default-flagged track, else the first
/// English track, else the first entry
pub fn default_audio_index(audios: &[AudioStream]) -> usize {
    audios
        .iter()
        .position(|a| a.is_default)
        .or_else(|| {
            audios
                .iter()
                .position(|a| a.language.to_lowercase().starts_with("en"))
        })
        .unwrap_or(0)
}

/// Menu labels for the video list, e.g. `720p (highest) (2500 kbps)`
pub fn video_menu_labels(videos: &[VideoStream]) -> Vec<String> {
    videos
        .iter()
        .enumerate()
        .map(|(index, video)| {
            let marker = if index == 0 { " (highest)" } else { "" };
            format!("{}{} ({} kbps)", video.quality, marker, video.bitrate / 1000)
        })
        .collect()
}

/// Menu labels for the audio list: locale-normalized language names, with
/// duplicates disambiguated by the original display name
pub fn audio_menu_labels(audios: &[AudioStream], names: &dyn LanguageNames) -> Vec<String> {
    let normalized: Vec<String> = audios
        .iter()
        .map(|audio| display_language(&audio.language, names))
        .collect();

    normalized
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let duplicated = normalized.iter().filter(|other| *other == name).count() > 1;
            if duplicated {
                format!("{} ({})", name, audios[index].name)
            } else {
                name.clone()
            }
        })
        .collect()
}

fn display_language(code: &str, names: &dyn LanguageNames) -> String {
    if code == AudioStream::UNDETERMINED {
        return AudioStream::ORIGINAL_NAME.to_string();
    }
    names.name_for(code).unwrap_or_else(|| code.to_string())
}

/// Read one menu choice. Empty input picks the default; a 1-based in-range
/// number picks that entry; anything else is invalid input.
fn choose_from_menu(prompter: &mut dyn Prompter, menu: &Menu) -> Option<(usize, bool)> {
    let line = prompter.read_choice(menu);
    let line = line.trim();
    if line.is_empty() {
        return Some((menu.default_index, true));
    }
    let choice: usize = line.parse().ok()?;
    if (1..=menu.entries.len()).contains(&choice) {
        Some((choice - 1, false))
    } else {
        None
    }
}

fn quality_digits(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}
