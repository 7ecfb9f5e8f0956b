use std::path::PathBuf;

use crate::cli::Cli;
use crate::structure_file::STRUCTURE_FILE_NAME;

/// Which way the tool converts between disk and structure file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Direction {
    Generate { input: PathBuf },
    Snapshot { folders: Vec<PathBuf> },
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub direction: Direction,
    pub output: PathBuf,
}

impl RuntimeConfig {
    /// `None` when no direction was requested on the command line.
    pub fn from_cli(cli: Cli) -> Option<Self> {
        let direction = match (cli.generate, cli.structure) {
            (Some(input), _) => Direction::Generate { input },
            (None, Some(folders)) => Direction::Snapshot { folders },
            (None, None) => return None,
        };

        Some(Self {
            direction,
            output: PathBuf::from(STRUCTURE_FILE_NAME),
        })
    }
}
