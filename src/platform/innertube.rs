//! InnerTube API client for video platform
//!
//! Resolves a video ID into [`PlayerData`] via the fixed player endpoint.
//! The thumbnail probe and the primary metadata attempt run concurrently;
//! a login/age lock triggers exactly one retry with the iOS profile.

use crate::core::streams::PlayerData;
use crate::error::PlayError;
use crate::platform::formats::parse_streams;
use crate::platform::profile::ClientProfile;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const PLAYER_ENDPOINT: &str = "https://www.youtube.com/youtubei/v1/player";
const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// InnerTube API client
pub struct InnerTubeClient {
    http_client: reqwest::Client,
    player_endpoint: String,
    thumbnail_base: String,
}

impl InnerTubeClient {
    /// Create a new InnerTube client with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new InnerTube client with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            player_endpoint: PLAYER_ENDPOINT.to_string(),
            thumbnail_base: THUMBNAIL_BASE.to_string(),
        }
    }

    /// Override the remote endpoints, used to point tests at a mock server
    pub fn with_endpoints(mut self, player_endpoint: &str, thumbnail_base: &str) -> Self {
        self.player_endpoint = player_endpoint.to_string();
        self.thumbnail_base = thumbnail_base.to_string();
        self
    }

    /// Fetch player data for a video ID
    ///
    /// The thumbnail probe and the Android-profile metadata attempt run
    /// concurrently. If the attempt fails with a login/age restriction, one
    /// sequential retry is made with the iOS profile; any other failure
    /// propagates as-is.
    pub async fn fetch_player_data(&self, video_id: &str) -> Result<PlayerData, PlayError> {
        info!("Fetching player data for video ID: {}", video_id);

        let (thumbnail_url, attempt) = tokio::join!(
            self.best_thumbnail_url(video_id),
            self.attempt_extraction(video_id, ClientProfile::Android),
        );

        let mut data = match attempt {
            Ok(data) => data,
            Err(err) if err.is_login_or_age_restriction() => {
                warn!(
                    "Android client rejected ({}), retrying with iOS client",
                    err
                );
                self.attempt_extraction(video_id, ClientProfile::Ios)
                    .await?
            }
            Err(err) => return Err(err),
        };

        data.thumbnail_url = Some(thumbnail_url);
        Ok(data)
    }

    /// One extraction attempt with a single client profile
    async fn attempt_extraction(
        &self,
        video_id: &str,
        profile: ClientProfile,
    ) -> Result<PlayerData, PlayError> {
        debug!("Requesting player data as {:?} client", profile);

        let response = self
            .http_client
            .post(&self.player_endpoint)
            .header("X-Youtube-Client-Name", profile.client_id())
            .header("X-Youtube-Client-Version", profile.client_version())
            .json(&profile.request_body(video_id))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlayError::RemoteRequestFailed(response.status().as_u16()));
        }

        let envelope: PlayerResponse = response.json().await?;

        match &envelope.playability_status {
            Some(status) if status.status.as_deref() == Some("OK") => {}
            Some(status) => {
                let reason = status
                    .reason
                    .clone()
                    .or_else(|| status.status.clone())
                    .unwrap_or_else(|| "Video is unplayable".to_string());
                return Err(PlayError::Unplayable(reason));
            }
            None => return Err(PlayError::Unplayable("Video is unplayable".to_string())),
        }

        let title = envelope
            .video_details
            .as_ref()
            .and_then(|details| details.title.as_deref())
            .map(str::trim)
            .filter(|title| !title.is_empty());

        let (Some(streaming_data), Some(title)) = (&envelope.streaming_data, title) else {
            return Err(PlayError::IncompleteResponse);
        };

        if envelope
            .video_details
            .as_ref()
            .is_some_and(|details| details.is_live_content)
        {
            return Err(PlayError::LiveStreamUnsupported);
        }

        let (videos, audios) = parse_streams(streaming_data, envelope.captions.as_ref());
        if audios.is_empty() {
            return Err(PlayError::NoAudioAvailable);
        }

        debug!(
            "Parsed {} video and {} audio streams",
            videos.len(),
            audios.len()
        );

        Ok(PlayerData {
            title: title.to_string(),
            thumbnail_url: None,
            videos,
            audios,
        })
    }

    /// Probe for the maximum-resolution thumbnail, falling back to the
    /// always-available tier. Never fails; network errors degrade silently.
    async fn best_thumbnail_url(&self, video_id: &str) -> String {
        let max_res_url = format!("{}/{}/maxresdefault.jpg", self.thumbnail_base, video_id);

        match self.http_client.head(&max_res_url).send().await {
            Ok(response) if response.status().is_success() => max_res_url,
            Ok(response) => {
                debug!(
                    "Max-res thumbnail probe returned {}, using fallback",
                    response.status()
                );
                format!("{}/{}/hqdefault.jpg", self.thumbnail_base, video_id)
            }
            Err(err) => {
                debug!("Thumbnail probe failed ({}), using fallback", err);
                format!("{}/{}/hqdefault.jpg", self.thumbnail_base, video_id)
            }
        }
    }
}

impl Default for InnerTubeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Player response envelope. The upstream shape is unversioned, so every
/// field is optional and absence is handled by the interpretation step.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub video_details: Option<VideoDetails>,
    pub streaming_data: Option<StreamingData>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayabilityStatus {
    pub status: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub title: Option<String>,
    #[serde(default)]
    pub is_live_content: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingData {
    pub adaptive_formats: Option<Vec<AdaptiveFormat>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveFormat {
    pub itag: Option<u32>,
    pub url: Option<String>,
    pub mime_type: Option<String>,
    pub bitrate: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    pub player_captions_tracklist_renderer: Option<CaptionTracklist>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTracklist {
    #[serde(default)]
    pub audio_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub audio_track_id: Option<String>,
    pub language_code: Option<String>,
    pub display_name: Option<String>,
    #[serde(default)]
    pub audio_is_default: bool,
}
