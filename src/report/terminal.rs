use std::io::{self, Write};

use colored::{Color, Colorize};
use tracing::debug;

use super::{Status, StatusReporter};

const FINISHED_MESSAGE: &str = "Finished!!";

/// Writes colored status lines to stdout.
#[derive(Debug, Default)]
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    /// Decides once whether stdout gets ANSI color codes.
    pub fn configure_colors() {
        let enabled = supports_color::on(supports_color::Stream::Stdout).is_some();
        debug!("Terminal colors enabled: {enabled}");
        colored::control::set_override(enabled);
    }

    /// Prints the closing line, uncolored so the terminal is left reset.
    pub fn finish(&mut self) {
        self.write_line(FINISHED_MESSAGE.normal().to_string());
    }

    fn color_of(status: &Status) -> Color {
        match status {
            Status::Created { .. } => Color::Green,
            Status::AlreadyExists { .. } | Status::Skipped { .. } => Color::Yellow,
            Status::Progress { .. } => Color::Blue,
            Status::Failed { .. } => Color::Red,
        }
    }

    fn write_line(&mut self, line: String) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            debug!("Failed to write status line: {e}");
        }
    }
}

impl StatusReporter for TerminalReporter {
    fn report(&mut self, status: Status) {
        let line = status.to_string().color(Self::color_of(&status)).to_string();
        self.write_line(line);
    }
}
