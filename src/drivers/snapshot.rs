use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::PathExt;
use crate::filesystem::{FolderTree, ReadError, snapshot};
use crate::report::{Status, StatusReporter};
use crate::structure_file::{StructureFile, StructureFileError};

/// Snapshots every valid folder in `folders` and saves the merged result to `output`.
///
/// Roots sharing a folder name replace earlier ones. The output is written even
/// when no folder was valid.
pub fn snapshot_folders(
    folders: &[PathBuf],
    base_dir: &Path,
    output: &Path,
    reporter: &mut impl StatusReporter,
) -> Result<FolderTree, SnapshotError> {
    let mut roots = FolderTree::new();

    for folder in folders {
        let folder = folder.resolve_from(base_dir);
        if !folder.is_dir() {
            reporter.report(Status::Skipped {
                reason: format!("{} is not a valid folder path.", folder.display()),
            });
            continue;
        }

        reporter.report(Status::Progress {
            message: format!("Generating for {}", folder.display()),
        });
        let tree = snapshot(&folder).context(ReadSnafu { folder: &folder })?;
        debug!("Snapshot of {}: {:?}", folder.display(), tree);
        roots.absorb(tree);
    }

    let output = output.resolve_from(base_dir);
    let file = StructureFile::from(roots);
    file.write(&output).context(SaveSnafu)?;
    reporter.report(Status::Progress {
        message: format!("Saved structure in {}", output.folder_name()),
    });

    Ok(file.into_roots())
}

#[derive(Debug, Snafu)]
pub enum SnapshotError {
    #[snafu(display("Failed to read the folder structure of {}", folder.display()))]
    ReadError { folder: PathBuf, source: ReadError },
    #[snafu(display("Failed to save the folder structure"))]
    SaveError { source: StructureFileError },
}
