//! Main entry point for ytplay CLI

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ytplay::cli::{Args, Terminal};
use ytplay::core::{SelectionPrefs, StaticLanguageNames};
use ytplay::platform::InnerTubeClient;
use ytplay::utils::url::extract_video_id;
use ytplay::{player, select_stream, PlayError};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();
    debug!("Starting ytplay with args: {:?}", args);

    let mut terminal = Terminal::new();
    match run(args, &mut terminal).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            // Declined or invalid interactive input: a clean end of the run
            println!("No stream selected.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            terminal.error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Resolve, select, and hand off to mpv. `Ok(false)` means nothing was
/// selected.
async fn run(args: Args, terminal: &mut Terminal) -> Result<bool, PlayError> {
    if args.audio && args.quality.is_some() {
        terminal.note("--audio flag is present, --quality flag will be ignored.");
    }

    let identifier = match &args.identifier {
        Some(identifier) => identifier.clone(),
        None => terminal.prompt_identifier()?,
    };
    let video_id = extract_video_id(&identifier)
        .ok_or_else(|| PlayError::InvalidIdentifier(identifier.clone()))?;

    if !player::is_available() {
        return Err(PlayError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "'mpv' not found in your system's PATH",
        )));
    }

    println!("Fetching video data for '{}'...", video_id);
    let client = InnerTubeClient::with_timeout(args.timeout_duration());
    let data = client.fetch_player_data(&video_id).await?;

    let prefs = SelectionPrefs {
        quality: args.quality,
        language: args.language,
        audio_only: args.audio,
    };
    let Some(selection) = select_stream(&data, &prefs, &StaticLanguageNames, terminal) else {
        return Ok(false);
    };

    terminal.print_now_playing(&data.title, &selection);
    player::launch(&data, &selection)?;
    Ok(true)
}

/// Initialize logging system
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
