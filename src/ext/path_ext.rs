use std::path::{Component, Path, PathBuf};

/// Marker that hides a directory entry from snapshots.
const HIDDEN_ENTRY_MARKER: char = '.';

pub trait PathExt {
    /// Joins a relative path onto `base`. `..` is kept for the OS to resolve.
    fn resolve_from(&self, base: &Path) -> PathBuf;

    /// Path relative to `root` when it lies under it, the full path otherwise.
    fn display_relative_to(&self, root: &Path) -> String;

    /// Final component once `.` and `..` are resolved lexically, empty for `/`.
    fn folder_name(&self) -> String;
}

impl PathExt for Path {
    fn resolve_from(&self, base: &Path) -> PathBuf {
        base.join(self)
    }

    fn display_relative_to(&self, root: &Path) -> String {
        match self.strip_prefix(root) {
            Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
            _ => self.display().to_string(),
        }
    }

    fn folder_name(&self) -> String {
        normalize_path(self)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl PathExt for PathBuf {
    fn resolve_from(&self, base: &Path) -> PathBuf {
        self.as_path().resolve_from(base)
    }

    fn display_relative_to(&self, root: &Path) -> String {
        self.as_path().display_relative_to(root)
    }

    fn folder_name(&self) -> String {
        self.as_path().folder_name()
    }
}

pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with(HIDDEN_ENTRY_MARKER)
}

fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Never pop past the root
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                }
            }
            _ => components.push(component),
        }
    }

    components.iter().collect()
}
