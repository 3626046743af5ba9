//! Terminal styles for human-readable output.
//!
//! Plain ANSI colors only, so output stays legible on any terminal theme.

use colored::{ColoredString, Colorize};

pub trait StyleExt {
    /// Field names in report headers.
    fn label(&self) -> ColoredString;
    fn value(&self) -> ColoredString;
    /// Secondary details such as timestamps.
    fn muted(&self) -> ColoredString;
    fn heading(&self) -> ColoredString;
    fn failure(&self) -> ColoredString;
}

impl<S: AsRef<str>> StyleExt for S {
    fn label(&self) -> ColoredString {
        self.as_ref().bright_cyan().bold()
    }

    fn value(&self) -> ColoredString {
        self.as_ref().bright_white()
    }

    fn muted(&self) -> ColoredString {
        self.as_ref().bright_black()
    }

    fn heading(&self) -> ColoredString {
        self.as_ref().bright_purple().bold()
    }

    fn failure(&self) -> ColoredString {
        self.as_ref().bright_red().bold()
    }
}
