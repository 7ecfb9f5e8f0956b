use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, warn};

use crate::ext::{PathExt, is_hidden_name};
use crate::filesystem::{FolderContents, FolderTree};

/// Reads `folder` into a single-key tree named after the folder itself.
///
/// Files are listed first, followed by one subtree entry holding every visible
/// subfolder. Hidden subfolders are skipped together with everything below them.
pub fn snapshot(folder: &Path) -> Result<FolderTree, ReadError> {
    let contents = snapshot_contents(folder)?;
    Ok(FolderTree::single(folder.folder_name(), contents))
}

fn snapshot_contents(folder: &Path) -> Result<FolderContents, ReadError> {
    let mut entries = fs::read_dir(folder)
        .context(ListFolderSnafu { path: folder })?
        .map(|entry| entry.context(ListFolderSnafu { path: folder }))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut contents = FolderContents::new();
    let mut subfolders = FolderTree::new();

    for entry in entries {
        let path = entry.path();
        let Ok(name) = entry.file_name().into_string() else {
            warn!("Skipping entry with a non UTF-8 name: {}", path.display());
            continue;
        };

        if path.is_file() {
            contents.push_file(name);
        } else if path.is_dir() {
            if is_hidden_name(&name) {
                debug!("Skipping hidden folder {}", path.display());
                continue;
            }
            let subcontents = snapshot_contents(&path)?;
            subfolders.insert(name, subcontents);
        }
    }

    if !subfolders.is_empty() {
        contents.push_subtree(subfolders);
    }

    Ok(contents)
}

#[derive(Debug, Snafu)]
pub enum ReadError {
    #[snafu(display("Failed to list folder {}", path.display()))]
    ListFolder {
        path: PathBuf,
        source: std::io::Error,
    },
}
