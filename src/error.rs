//! Error types for ytplay

use thiserror::Error;

/// Main error type for ytplay operations
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("Invalid YouTube URL or video ID: '{0}'")]
    InvalidIdentifier(String),

    #[error("API request failed with status code: {0}")]
    RemoteRequestFailed(u16),

    #[error("{0}")]
    Unplayable(String),

    #[error("Incomplete video data received from API")]
    IncompleteResponse,

    #[error("Live streams are not supported")]
    LiveStreamUnsupported,

    #[error("No audio streams available for this video")]
    NoAudioAvailable,

    #[error("Invalid selection input")]
    InvalidSelectionInput,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlayError {
    /// Check if the error signals a login or age restriction, which warrants
    /// one retry against the alternate client profile.
    pub fn is_login_or_age_restriction(&self) -> bool {
        let message = self.to_string().to_lowercase();
        message.contains("login_required") || message.contains("age")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_required_is_retryable() {
        let err = PlayError::Unplayable("LOGIN_REQUIRED".to_string());
        assert!(err.is_login_or_age_restriction());
    }

    #[test]
    fn test_age_restriction_is_retryable() {
        let err = PlayError::Unplayable("Sign in to confirm your AGE".to_string());
        assert!(err.is_login_or_age_restriction());
    }

    #[test]
    fn test_other_errors_are_not_retryable() {
        assert!(!PlayError::RemoteRequestFailed(403).is_login_or_age_restriction());
        assert!(!PlayError::IncompleteResponse.is_login_or_age_restriction());
        assert!(!PlayError::Unplayable("This video is private".to_string())
            .is_login_or_age_restriction());
    }
}
