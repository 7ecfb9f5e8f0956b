use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::ext::PathExt;
use crate::filesystem::{BuildError, TreeBuilder};
use crate::report::{EntryKind, Status, StatusReporter};
use crate::structure_file::{StructureFile, StructureFileError};

/// Creates every root folder described in the structure file at `input`.
///
/// Relative paths, including root folder names, resolve against `base_dir`.
pub fn generate(
    input: &Path,
    base_dir: &Path,
    reporter: &mut impl StatusReporter,
) -> Result<(), GenerateError> {
    let input = input.resolve_from(base_dir);
    if !input.is_file() {
        reporter.report(Status::Skipped {
            reason: format!("{} is not a valid file path.", input.display()),
        });
        return Ok(());
    }

    let roots = StructureFile::read(&input)
        .context(StructureFileSnafu)?
        .into_roots();
    debug!("Loaded {} root folders from {}", roots.len(), input.display());

    for (name, contents) in roots.iter() {
        if name.is_empty() {
            reporter.report(Status::Skipped {
                reason: "Skipping root folder with an empty name.".into(),
            });
            continue;
        }

        let root = Path::new(name).resolve_from(base_dir);
        if root.is_file() {
            reporter.report(Status::Skipped {
                reason: format!(
                    "{} is a file, cannot create a folder with the same name.",
                    root.display()
                ),
            });
            continue;
        }

        let root_display = root.display_relative_to(base_dir);
        if root.is_dir() {
            reporter.report(Status::AlreadyExists {
                kind: EntryKind::Folder,
                path: root_display,
            });
        } else {
            reporter.report(Status::Progress {
                message: format!("Creating {}", root.display()),
            });
            fs::create_dir_all(&root).context(CreateRootSnafu { path: &root })?;
            reporter.report(Status::Created {
                kind: EntryKind::Folder,
                path: root_display,
            });
        }

        reporter.report(Status::Progress {
            message: format!("Starting for {}", root.display()),
        });
        info!("Materializing root folder {}", root.display());
        TreeBuilder::new(&root, &mut *reporter)
            .materialize(&root, contents)
            .context(BuildSnafu { root: &root })?;
    }

    Ok(())
}

#[derive(Debug, Snafu)]
pub enum GenerateError {
    #[snafu(display("Failed to load the folder structure"))]
    StructureFileError { source: StructureFileError },
    #[snafu(display("Failed to create root folder {}", path.display()))]
    CreateRootError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to build the folder structure under {}", root.display()))]
    BuildError { root: PathBuf, source: BuildError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;
    use tempfile::TempDir;

    fn write_input(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("structure.json");
        fs::write(&path, json).expect("Failed to write input");
        path
    }

    #[test]
    fn scenario_creates_four_entries_without_warnings() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        let input = write_input(base, r#"{"proj": ["readme.md", {"src": ["main.ext"]}]}"#);
        let mut reporter = RecordingReporter::default();

        generate(&input, base, &mut reporter).expect("Failed to generate");

        assert!(base.join("proj").is_dir());
        assert!(base.join("proj/readme.md").is_file());
        assert!(base.join("proj/src").is_dir());
        assert!(base.join("proj/src/main.ext").is_file());
        assert_eq!(reporter.created().len(), 4);
        assert!(reporter.already_existing().is_empty());
        assert!(reporter.skipped().is_empty());
        assert!(reporter.statuses.contains(&Status::Created {
            kind: EntryKind::Folder,
            path: "proj".into()
        }));
        assert!(reporter.statuses.contains(&Status::Created {
            kind: EntryKind::File,
            path: "src/main.ext".into()
        }));
    }

    #[test]
    fn relative_input_path_resolves_against_base() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        write_input(base, r#"{"proj": ["a"]}"#);
        let mut reporter = RecordingReporter::default();

        generate(Path::new("structure.json"), base, &mut reporter).expect("Failed to generate");

        assert!(base.join("proj/a").is_file());
    }

    #[test]
    fn nested_root_names_create_missing_parents() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        let input = write_input(base, r#"{"deep/nested/proj": ["a"]}"#);
        let mut reporter = RecordingReporter::default();

        generate(&input, base, &mut reporter).expect("Failed to generate");

        assert!(base.join("deep/nested/proj/a").is_file());
    }

    #[test]
    fn second_run_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        let input = write_input(
            base,
            r#"{"proj": ["readme.md", {"src": ["main.ext", {"lib": []}]}]}"#,
        );

        let mut first = RecordingReporter::default();
        generate(&input, base, &mut first).expect("Failed first run");
        let mut second = RecordingReporter::default();
        generate(&input, base, &mut second).expect("Failed second run");

        assert_eq!(first.created().len(), 5);
        assert!(second.created().is_empty());
        assert_eq!(second.already_existing().len(), 5);
        assert!(
            !second
                .statuses
                .iter()
                .any(|status| matches!(status, Status::Progress { message } if message.starts_with("Creating")))
        );
    }

    #[test]
    fn missing_input_is_skipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut reporter = RecordingReporter::default();

        let result = generate(Path::new("missing.json"), temp_dir.path(), &mut reporter);

        assert!(result.is_ok());
        assert_eq!(reporter.skipped().len(), 1);
    }

    #[test]
    fn folder_as_input_is_skipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let mut reporter = RecordingReporter::default();

        let result = generate(temp_dir.path(), temp_dir.path(), &mut reporter);

        assert!(result.is_ok());
        assert_eq!(reporter.skipped().len(), 1);
    }

    #[test]
    fn root_occupied_by_a_file_is_skipped_and_others_continue() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        fs::write(base.join("taken"), "").expect("Failed to write file");
        let input = write_input(base, r#"{"taken": ["a"], "free": ["b"]}"#);
        let mut reporter = RecordingReporter::default();

        generate(&input, base, &mut reporter).expect("Failed to generate");

        assert!(base.join("taken").is_file());
        assert!(base.join("free/b").is_file());
        assert_eq!(reporter.skipped().len(), 1);
    }

    #[test]
    fn malformed_input_fails_before_creating_anything() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        let input = write_input(base, r#"{"proj": ["a", "#);
        let mut reporter = RecordingReporter::default();

        let result = generate(&input, base, &mut reporter);

        assert!(matches!(
            result,
            Err(GenerateError::StructureFileError {
                source: StructureFileError::ParseError { .. }
            })
        ));
        assert!(!base.join("proj").exists());
    }

    #[test]
    fn name_overlap_aborts_the_run() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        let input = write_input(base, r#"{"root": ["a", {"a": []}], "later": ["b"]}"#);
        let mut reporter = RecordingReporter::default();

        let result = generate(&input, base, &mut reporter);

        assert!(matches!(
            result,
            Err(GenerateError::BuildError {
                source: BuildError::NameCollision { .. },
                ..
            })
        ));
        assert!(base.join("root").is_dir());
        assert!(!base.join("root/a").exists());
        assert!(!base.join("later").exists());
    }

    #[test]
    fn empty_root_name_is_skipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        let input = write_input(base, r#"{"": ["a"], "ok": []}"#);
        let mut reporter = RecordingReporter::default();

        generate(&input, base, &mut reporter).expect("Failed to generate");

        assert_eq!(reporter.skipped().len(), 1);
        assert!(base.join("ok").is_dir());
        assert!(!base.join("a").exists());
    }

    #[cfg(unix)]
    #[test]
    fn parent_components_are_resolved_through_symlinks() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();
        fs::create_dir_all(base.join("real/sub")).expect("Failed to create folders");
        std::os::unix::fs::symlink(base.join("real/sub"), base.join("link"))
            .expect("Failed to create symlink");
        write_input(&base.join("real"), r#"{"proj": ["a"]}"#);
        let mut reporter = RecordingReporter::default();

        generate(Path::new("link/../structure.json"), base, &mut reporter)
            .expect("Failed to generate");

        assert!(reporter.skipped().is_empty());
        assert!(base.join("proj/a").is_file());
    }
}
