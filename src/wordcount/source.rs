use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// One input stream. Identified by the base name of its path, which is also
/// what the report uses as the column name.
#[derive(derive_more::Display, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{name}")]
pub struct Source {
    name: String,
    path: PathBuf,
}

impl Source {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Source { name, path }
    }

    /// A source with no backing file, used with in-memory producers.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Source {
            path: PathBuf::from(&name),
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}
