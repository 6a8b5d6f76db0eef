//! Terminal prompting and output formatting
//!
//! All menu rendering and line reading lives here; the selection engine only
//! sees the [`Prompter`] trait.

use crate::core::selection::{Menu, Prompter};
use crate::core::streams::StreamSelection;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Interactive terminal front-end
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    /// Ask for a URL or video ID when none was given on the command line
    pub fn prompt_identifier(&self) -> io::Result<String> {
        print!("Enter YouTube URL or video ID: ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Print an informational note
    pub fn note(&self, message: &str) {
        println!("{} {}", "Info:".cyan().bold(), message);
    }

    /// Print a user-visible error line
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Announce the stream pair handed to mpv
    pub fn print_now_playing(&self, title: &str, selection: &StreamSelection) {
        let detail = match selection {
            StreamSelection::Video { video, audio } => {
                format!("{} / {}", video.quality, audio.name)
            }
            StreamSelection::Audio { audio } => format!("Audio only / {}", audio.name),
        };
        println!("\n{} {} [{}]", "Playing:".green().bold(), title, detail);
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for Terminal {
    fn read_choice(&mut self, menu: &Menu) -> String {
        println!("{}", menu.heading.bold());
        for (index, entry) in menu.entries.iter().enumerate() {
            println!("{}) {}", (index + 1).to_string().cyan(), entry);
        }
        print!(
            "Select [1-{}, default: {}]: ",
            menu.entries.len(),
            menu.default_index + 1
        );
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        line
    }
}
