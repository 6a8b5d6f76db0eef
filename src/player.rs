//! mpv launcher
//!
//! Hands a resolved stream selection to an external mpv process. ytplay's
//! responsibility ends once the process is spawned.

use crate::core::streams::{PlayerData, StreamSelection};
use crate::error::PlayError;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

fn mpv_executable() -> &'static str {
    if cfg!(windows) {
        "mpv.exe"
    } else {
        "mpv"
    }
}

/// Check whether mpv can be found on PATH
pub fn is_available() -> bool {
    let Some(path_var) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&path_var)
        .any(|dir| Path::new(&dir).join(mpv_executable()).is_file())
}

/// Spawn mpv with the selected streams. Does not wait for playback to end.
pub fn launch(data: &PlayerData, selection: &StreamSelection) -> Result<(), PlayError> {
    let mut command = Command::new(mpv_executable());
    command
        .arg(format!("--title={}", data.title))
        .arg("--force-media-title= ")
        .arg("--keep-open=yes");

    match selection {
        StreamSelection::Video { video, audio } => {
            command
                .arg(&video.url)
                .arg(format!("--audio-file={}", audio.url));
            info!(
                "Playing: {} [{} / {}]",
                data.title, video.quality, audio.name
            );
        }
        StreamSelection::Audio { audio } => {
            match &data.thumbnail_url {
                // Show the thumbnail as a still video track
                Some(thumbnail_url) => {
                    command
                        .arg(thumbnail_url)
                        .arg(format!("--audio-file={}", audio.url))
                        .arg("--image-display-duration=inf")
                        .arg("--force-window=immediate")
                        .arg("--video-unscaled=yes")
                        .arg("--terminal=no");
                }
                None => {
                    command.arg(&audio.url).arg("--force-window");
                }
            }
            info!("Playing: {} [Audio only / {}]", data.title, audio.name);
        }
    }

    debug!("Spawning {:?}", command);
    command.spawn()?;
    Ok(())
}
