use std::env;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::{Direction, RuntimeConfig};
use crate::drivers::{GenerateError, SnapshotError, generate, snapshot_folders};
use crate::report::StatusReporter;

pub struct Application;

impl Application {
    pub fn run(
        runtime_config: RuntimeConfig,
        reporter: &mut impl StatusReporter,
    ) -> Result<(), ApplicationError> {
        let base_dir = env::current_dir().context(CurrentDirSnafu)?;
        debug!("Working directory: {}", base_dir.display());

        match &runtime_config.direction {
            Direction::Generate { input } => {
                generate(input, &base_dir, reporter).context(GenerateSnafu)?;
            }
            Direction::Snapshot { folders } => {
                let roots = snapshot_folders(folders, &base_dir, &runtime_config.output, reporter)
                    .context(SnapshotSnafu)?;
                debug!("Saved {} root folders", roots.len());
            }
        }

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to obtain current dir"))]
    CurrentDirError { source: std::io::Error },
    #[snafu(display("Critical failure encountered while generating folders"))]
    GenerateError { source: GenerateError },
    #[snafu(display("Critical failure encountered while saving folder structure"))]
    SnapshotError { source: SnapshotError },
}
