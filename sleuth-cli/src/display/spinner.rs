use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Activity indicator on stderr while a fetch is in flight.
///
/// Hidden when stderr is not a terminal so redirected output stays clean.
pub struct Spinner {
    progress: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        if !std::io::stderr().is_terminal() {
            return Self {
                progress: ProgressBar::hidden(),
            };
        }

        let progress = ProgressBar::new_spinner().with_message(message.to_string());
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars(TICK_CHARS)
            .template("{spinner:.cyan} {msg} {elapsed:.dim}")
        {
            progress.set_style(style);
        }
        progress.enable_steady_tick(Duration::from_millis(80));

        Self { progress }
    }

    pub fn finish(self) {
        self.progress.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.progress.is_finished() {
            self.progress.finish_and_clear();
        }
    }
}
