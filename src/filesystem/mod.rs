//! In-memory folder structure and the two walks over it.
//!
//! [`TreeBuilder`] materializes a [`FolderContents`] value on disk, while
//! [`snapshot`] reads an existing directory back into a [`FolderTree`].

mod builder;
mod reader;
mod tree;

pub use builder::{BuildError, TreeBuilder};
pub use reader::{ReadError, snapshot};
pub use tree::{FolderContents, FolderEntry, FolderTree};
