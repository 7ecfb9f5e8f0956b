use std::fmt;

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    #[display("file")]
    File,
    #[display("folder")]
    Folder,
}

/// A single line of user-facing progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Created { kind: EntryKind, path: String },
    AlreadyExists { kind: EntryKind, path: String },
    Skipped { reason: String },
    Progress { message: String },
    Failed { message: String },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Created { kind, path } => write!(f, "{path} {kind} created successfully."),
            Status::AlreadyExists { kind, path } => write!(f, "{path} {kind} already exists."),
            Status::Skipped { reason } => f.write_str(reason),
            Status::Progress { message } => f.write_str(message),
            Status::Failed { message } => f.write_str(message),
        }
    }
}

/// Sink for status lines produced while walking a tree.
pub trait StatusReporter {
    fn report(&mut self, status: Status);
}

impl<R: StatusReporter + ?Sized> StatusReporter for &mut R {
    fn report(&mut self, status: Status) {
        (**self).report(status);
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub statuses: Vec<Status>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn created(&self) -> Vec<&Status> {
        self.statuses
            .iter()
            .filter(|status| matches!(status, Status::Created { .. }))
            .collect()
    }

    pub fn already_existing(&self) -> Vec<&Status> {
        self.statuses
            .iter()
            .filter(|status| matches!(status, Status::AlreadyExists { .. }))
            .collect()
    }

    pub fn skipped(&self) -> Vec<&Status> {
        self.statuses
            .iter()
            .filter(|status| matches!(status, Status::Skipped { .. }))
            .collect()
    }
}

#[cfg(test)]
impl StatusReporter for RecordingReporter {
    fn report(&mut self, status: Status) {
        self.statuses.push(status);
    }
}
