//! Terminal output helpers: banner, transcript lines, typing spinner.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_banner() {
    println!(
        "{} {}",
        "PARTYLINE".green().bold(),
        format!("v{VERSION}").dimmed()
    );
    println!("{}", "The party bot is on the line. Say something.".green());
    println!();
}

pub fn print_bot_line(reply: &str) {
    println!("{} {reply}", "Bot:".green().bold());
    println!();
}

pub fn print_goodbye() {
    println!("{}", "The party rolls on without you. Goodbye!".green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", "error:".red().bold());
}

/// A terminal spinner shown while a reply is pending.
///
/// Always rendered below the newest transcript line; clears itself when
/// dropped (RAII pattern).
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Creates and starts a new spinner with the given message.
    pub fn new(message: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner} {msg}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
