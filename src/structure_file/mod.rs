mod structure_file;

pub use structure_file::{STRUCTURE_FILE_NAME, StructureFile, StructureFileError};
