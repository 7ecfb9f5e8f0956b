use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use hashlink::{LinkedHashMap, LinkedHashSet};
use snafu::{ResultExt, Snafu, ensure};
use tracing::{debug, warn};

use crate::ext::PathExt;
use crate::filesystem::{FolderContents, FolderEntry};
use crate::report::{EntryKind, Status, StatusReporter};

/// Creates the files and folders described by a [`FolderContents`] under a root,
/// never touching anything that already exists.
pub struct TreeBuilder<'a, R: StatusReporter> {
    root: &'a Path,
    reporter: R,
}

impl<'a, R: StatusReporter> TreeBuilder<'a, R> {
    pub fn new(root: &'a Path, reporter: R) -> Self {
        Self { root, reporter }
    }

    /// Materializes `contents` inside `folder`, recursing depth-first.
    ///
    /// Name checks run per level before that level is touched, so a failure leaves
    /// levels handled earlier in place. Files already on disk take part in those
    /// checks but are only reported when `contents` declares them.
    pub fn materialize(
        &mut self,
        folder: &Path,
        contents: &FolderContents,
    ) -> Result<(), BuildError> {
        if contents.is_empty() {
            debug!("Nothing to create in {}", folder.display());
            return Ok(());
        }

        let level = Level::plan(folder, contents)?;
        let on_disk = OnDisk::read(folder)?;
        level.check_collisions(folder, &on_disk)?;

        for name in level.files.iter() {
            self.create_file(&folder.join(name))?;
        }

        for (name, subcontents) in level.folders.iter() {
            let subfolder = folder.join(name);
            self.create_folder(&subfolder)?;
            self.materialize(&subfolder, subcontents)?;
        }

        Ok(())
    }

    fn create_file(&mut self, path: &Path) -> Result<(), BuildError> {
        let display = path.display_relative_to(self.root);
        if path.is_file() {
            self.reporter.report(Status::AlreadyExists {
                kind: EntryKind::File,
                path: display,
            });
            return Ok(());
        }

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .context(CreateFileSnafu { path })?;
        debug!("Created file {}", path.display());
        self.reporter.report(Status::Created {
            kind: EntryKind::File,
            path: display,
        });
        Ok(())
    }

    fn create_folder(&mut self, path: &Path) -> Result<(), BuildError> {
        let display = path.display_relative_to(self.root);
        if path.is_dir() {
            self.reporter.report(Status::AlreadyExists {
                kind: EntryKind::Folder,
                path: display,
            });
            return Ok(());
        }

        fs::create_dir(path).context(CreateFolderSnafu { path })?;
        debug!("Created folder {}", path.display());
        self.reporter.report(Status::Created {
            kind: EntryKind::Folder,
            path: display,
        });
        Ok(())
    }
}

/// What one folder level asks for once its entries are partitioned and merged.
#[derive(Debug)]
struct Level<'c> {
    files: LinkedHashSet<&'c str>,
    folders: LinkedHashMap<&'c str, &'c FolderContents>,
}

impl<'c> Level<'c> {
    fn plan(folder: &Path, contents: &'c FolderContents) -> Result<Self, BuildError> {
        let mut files = LinkedHashSet::new();
        let mut folders: LinkedHashMap<&'c str, &'c FolderContents> = LinkedHashMap::new();

        for entry in contents.iter() {
            match entry {
                FolderEntry::File(name) if name.is_empty() => {
                    warn!("Ignoring empty file name in {}", folder.display());
                }
                FolderEntry::File(name) => {
                    ensure_plain_name(folder, name)?;
                    files.insert(name.as_str());
                }
                FolderEntry::Subtree(subtree) => {
                    for (name, subcontents) in subtree.iter() {
                        ensure_plain_name(folder, name)?;
                        Self::merge_folder(folder, &mut folders, name, subcontents)?;
                    }
                }
            }
        }

        Ok(Self { files, folders })
    }

    /// Merges one folder declaration into the level's mapping. Every folder name may
    /// be declared only once per level, whichever entry declares it.
    fn merge_folder(
        folder: &Path,
        folders: &mut LinkedHashMap<&'c str, &'c FolderContents>,
        name: &'c str,
        subcontents: &'c FolderContents,
    ) -> Result<(), BuildError> {
        ensure!(
            !folders.contains_key(name),
            DuplicateFolderSnafu {
                name,
                path: folder.to_path_buf(),
            }
        );
        folders.insert(name, subcontents);
        Ok(())
    }

    fn check_collisions(&self, folder: &Path, on_disk: &OnDisk) -> Result<(), BuildError> {
        let folder_clash = self
            .folders
            .keys()
            .find(|name| self.files.contains(*name) || on_disk.files.contains(**name));
        let file_clash = self
            .files
            .iter()
            .find(|name| on_disk.folders.contains(**name));

        match folder_clash.or(file_clash) {
            Some(name) => NameCollisionSnafu {
                name: *name,
                path: folder.to_path_buf(),
            }
            .fail(),
            None => Ok(()),
        }
    }
}

/// Names already present in a folder before this level is built.
#[derive(Debug, Default)]
struct OnDisk {
    files: HashSet<String>,
    folders: HashSet<String>,
}

impl OnDisk {
    fn read(folder: &Path) -> Result<Self, BuildError> {
        let mut on_disk = Self::default();
        let entries = fs::read_dir(folder).context(ReadFolderSnafu { path: folder })?;

        for entry in entries {
            let entry = entry.context(ReadFolderSnafu { path: folder })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path();
            if path.is_dir() {
                on_disk.folders.insert(name);
            } else if path.is_file() {
                on_disk.files.insert(name);
            }
        }

        Ok(on_disk)
    }
}

fn ensure_plain_name(folder: &Path, name: &str) -> Result<(), BuildError> {
    let plain = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !Path::new(name).is_absolute();

    if plain {
        Ok(())
    } else {
        InvalidEntryNameSnafu {
            name,
            path: folder.to_path_buf(),
        }
        .fail()
    }
}

#[derive(Debug, Snafu)]
pub enum BuildError {
    #[snafu(display("Folder '{}' is declared more than once in {}", name, path.display()))]
    DuplicateFolder { name: String, path: PathBuf },
    #[snafu(display(
        "File and folder names cannot be the same: '{}' in {}",
        name,
        path.display()
    ))]
    NameCollision { name: String, path: PathBuf },
    #[snafu(display("'{}' in {} is not a plain file or folder name", name, path.display()))]
    InvalidEntryName { name: String, path: PathBuf },
    #[snafu(display("Failed to list folder {}", path.display()))]
    ReadFolder {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create file {}", path.display()))]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to create folder {}", path.display()))]
    CreateFolder {
        path: PathBuf,
        source: std::io::Error,
    },
}
