//! Command line argument parsing

use clap::Parser;
use std::time::Duration;

/// Play YouTube videos and audio tracks in mpv
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YouTube URL or video ID (prompted for when omitted)
    pub identifier: Option<String>,

    /// Stream quality (e.g., '720p', 'highest', 'lowest')
    #[arg(short, long, value_name = "QUALITY")]
    pub quality: Option<String>,

    /// Audio language (e.g., 'en', 'es-419')
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Play audio only
    #[arg(short, long)]
    pub audio: bool,

    /// HTTP timeout (e.g., 15s, 1m)
    #[arg(long, value_name = "DURATION", default_value = "15s")]
    pub timeout: humantime::Duration,
}

impl Args {
    /// Get HTTP timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        self.timeout.into()
    }
}
