//! Client profiles for the player API
//!
//! Stream availability differs per client application, so requests are made
//! under one of a small closed set of emulated clients. The Android profile
//! is the primary; the iOS profile is the fallback for login/age locks.

use serde::Serialize;

/// Emulated client application for player API requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientProfile {
    Android,
    Ios,
}

impl ClientProfile {
    /// Upstream client name
    pub fn client_name(&self) -> &'static str {
        match self {
            ClientProfile::Android => "ANDROID",
            ClientProfile::Ios => "IOS",
        }
    }

    /// Upstream client version
    pub fn client_version(&self) -> &'static str {
        match self {
            ClientProfile::Android => "19.50.42",
            ClientProfile::Ios => "17.13.3",
        }
    }

    /// Numeric client ID sent in the `X-Youtube-Client-Name` header
    pub fn client_id(&self) -> &'static str {
        match self {
            ClientProfile::Android => "3",
            ClientProfile::Ios => "5",
        }
    }

    /// Device model, only set for clients that require one
    pub fn device_model(&self) -> Option<&'static str> {
        match self {
            ClientProfile::Android => None,
            ClientProfile::Ios => Some("iPhone14,3"),
        }
    }

    /// Build the player API request body for a video ID
    pub fn request_body(&self, video_id: &str) -> PlayerRequest {
        PlayerRequest {
            context: RequestContext {
                client: ClientContext {
                    client_name: self.client_name(),
                    client_version: self.client_version(),
                    device_model: self.device_model(),
                    hl: "en",
                    gl: "US",
                },
                user: UserContext {
                    locked_safety_mode: false,
                },
            },
            video_id: video_id.to_string(),
            content_check_ok: true,
            racy_check_ok: true,
        }
    }
}

/// Player API request payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    pub context: RequestContext,
    pub video_id: String,
    pub content_check_ok: bool,
    pub racy_check_ok: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub client: ClientContext,
    pub user: UserContext,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientContext {
    pub client_name: &'static str,
    pub client_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model: Option<&'static str>,
    pub hl: &'static str,
    pub gl: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub locked_safety_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_android_request_body() {
        let body = ClientProfile::Android.request_body("dQw4w9WgXcQ");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["context"]["client"]["clientName"], "ANDROID");
        assert_eq!(json["context"]["client"]["clientVersion"], "19.50.42");
        assert_eq!(json["context"]["client"]["hl"], "en");
        assert_eq!(json["context"]["client"]["gl"], "US");
        assert_eq!(json["context"]["user"]["lockedSafetyMode"], false);
        assert_eq!(json["videoId"], "dQw4w9WgXcQ");
        assert_eq!(json["contentCheckOk"], true);
        assert_eq!(json["racyCheckOk"], true);
        // Android carries no device model and the field must be absent
        assert!(json["context"]["client"].get("deviceModel").is_none());
    }

    #[test]
    fn test_ios_request_body_has_device_model() {
        let body = ClientProfile::Ios.request_body("dQw4w9WgXcQ");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["context"]["client"]["clientName"], "IOS");
        assert_eq!(json["context"]["client"]["deviceModel"], "iPhone14,3");
    }

    #[test]
    fn test_header_ids() {
        assert_eq!(ClientProfile::Android.client_id(), "3");
        assert_eq!(ClientProfile::Ios.client_id(), "5");
    }
}
