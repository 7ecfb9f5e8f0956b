mod generate;
mod snapshot;

pub use generate::{GenerateError, generate};
pub use snapshot::{SnapshotError, snapshot_folders};
