use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use derive_more::{Deref, From};
use serde_json::Value;
use snafu::prelude::*;
use tracing::debug;

use crate::filesystem::FolderTree;

/// Name of the file a snapshot is saved to, in the working directory.
pub const STRUCTURE_FILE_NAME: &str = "folder_structure.json";

/// A JSON document mapping root folder names to their contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From)]
pub struct StructureFile {
    roots: FolderTree,
}

impl StructureFile {
    pub fn read(path: &Path) -> Result<Self, StructureFileError> {
        debug!("Reading structure file {}", path.display());
        let contents = fs::read_to_string(path).context(ReadSnafu { path })?;
        debug!("Read {} bytes", contents.len());
        contents.as_str().try_into()
    }

    /// Writes the structure as 2-space indented JSON, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), StructureFileError> {
        debug!("Writing structure file {}", path.display());
        let json = self.to_json()?;
        let file = File::create(path).context(WriteSnafu { path })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(json.as_bytes())
            .and_then(|()| writer.flush())
            .context(WriteSnafu { path })?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, StructureFileError> {
        serde_json::to_string_pretty(&self.roots).context(EncodeSnafu)
    }

    pub fn into_roots(self) -> FolderTree {
        self.roots
    }
}

impl TryFrom<&str> for StructureFile {
    type Error = StructureFileError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let value: Value = serde_json::from_str(contents).context(ParseSnafu)?;
        ensure!(value.is_object(), TopLevelNotMapSnafu);

        // Decode from text again so folder order survives
        let roots = serde_json::from_str(contents).context(MalformedStructureSnafu)?;
        Ok(StructureFile { roots })
    }
}

#[derive(Debug, Snafu)]
pub enum StructureFileError {
    #[snafu(display("Failed to read the structure file: {}", path.display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write the structure file: {}", path.display()))]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the structure file"))]
    ParseError { source: serde_json::Error },
    #[snafu(display("Top level of the structure file should be an object"))]
    TopLevelNotMap,
    #[snafu(display("Folder contents should be lists of file names and folder objects"))]
    MalformedStructure { source: serde_json::Error },
    #[snafu(display("Failed to encode the folder structure"))]
    EncodeError { source: serde_json::Error },
}
