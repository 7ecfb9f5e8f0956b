use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::application::data::LogLevel;

/// Convert between folder trees on disk and JSON folder structures.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
#[command(group(ArgGroup::new("direction").args(["generate", "structure"])))]
pub struct Cli {
    /// Generate files/folders from the given folder structure JSON file.
    /// Existing files and folders are left untouched.
    #[clap(long, short, value_name = "FILE")]
    pub generate: Option<PathBuf>,

    /// Save the folder structure of the given folders in folder_structure.json.
    /// Overwrites that file if present.
    #[clap(long = "struct", short = 's', value_name = "FOLDER", num_args = 1..)]
    pub structure: Option<Vec<PathBuf>>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&["folder-struct", "-g", "a.json", "-s", "dir"])]
    #[case(&["folder-struct", "-s"])]
    #[case(&["folder-struct", "-g"])]
    fn rejects_invalid_combinations(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn struct_accepts_several_folders() {
        let cli = Cli::try_parse_from(["folder-struct", "-s", "one", "two", "three"])
            .expect("Invalid args");

        assert_eq!(
            cli.structure,
            Some(vec![
                PathBuf::from("one"),
                PathBuf::from("two"),
                PathBuf::from("three")
            ])
        );
        assert!(cli.generate.is_none());
    }

    #[test]
    fn log_level_defaults_to_warn() {
        let cli = Cli::try_parse_from(["folder-struct"]).expect("Invalid args");
        assert!(matches!(cli.log_level, LogLevel::Warn));
    }
}
