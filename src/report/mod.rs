mod status;
mod terminal;

pub use status::{EntryKind, Status, StatusReporter};
pub use terminal::TerminalReporter;

#[cfg(test)]
pub use status::RecordingReporter;
