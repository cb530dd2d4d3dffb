//=========================================================================
// Asset References
//=========================================================================
//
// Mesh and clip files are referenced by name + extension and resolved
// against the assets directory. Files are never opened or decoded here.
//
//=========================================================================

use std::fmt;
use std::path::{Path, PathBuf};

/// A file name and extension, kept exactly as the caller passed them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRef {
    pub filename: String,
    pub extension: String,
}

impl AssetRef {
    pub fn new(filename: &str, extension: &str) -> Self {
        Self {
            filename: filename.to_owned(),
            extension: extension.to_owned(),
        }
    }

    /// `filename.extension`, or just `filename` if the extension is empty.
    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.filename.clone()
        } else {
            format!("{}.{}", self.filename, self.extension)
        }
    }

    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.file_name())
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Mesh bound to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBinding {
    pub asset: AssetRef,
    /// Whether the importer should flip the mesh's handedness.
    pub flip: bool,
}
