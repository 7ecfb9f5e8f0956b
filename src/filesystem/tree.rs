use derive_more::{Deref, DerefMut, From};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Deserializer, Serialize};

/// One child of a folder: either a file name or a nested set of folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FolderEntry {
    File(String),
    Subtree(FolderTree),
}

/// Ordered children of a single folder. `null` and `[]` both mean "leaf".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deref, DerefMut, From)]
#[serde(transparent)]
pub struct FolderContents(Vec<FolderEntry>);

impl<'de> Deserialize<'de> for FolderContents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Vec<FolderEntry>>::deserialize(deserializer)
            .map(|entries| FolderContents(entries.unwrap_or_default()))
    }
}

impl FolderContents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_file(&mut self, name: impl Into<String>) {
        self.0.push(FolderEntry::File(name.into()));
    }

    pub fn push_subtree(&mut self, subtree: FolderTree) {
        self.0.push(FolderEntry::Subtree(subtree));
    }
}

/// Insertion-ordered mapping from folder name to its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Deref, DerefMut, From)]
#[serde(transparent)]
pub struct FolderTree(LinkedHashMap<String, FolderContents>);

impl FolderTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(name: impl Into<String>, contents: FolderContents) -> Self {
        let mut tree = Self::new();
        tree.insert(name.into(), contents);
        tree
    }

    /// Adds every folder of `other`, replacing folders with the same name.
    pub fn absorb(&mut self, other: FolderTree) {
        for (name, contents) in other.0 {
            self.0.replace(name, contents);
        }
    }
}
