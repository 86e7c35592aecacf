//! Source positions for template elements.
use core::fmt;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

// Most blocks produced in tests and by in-memory templates have no path, so
// share one allocation for the empty identifier.
static EMPTY_FILE_ID: LazyLock<Arc<str>> = LazyLock::new(|| Arc::from(""));

/// FileId identifies the template file that a block came from.
///
/// The empty identifier means the origin is unknown, which suppresses
/// line directives for blocks carrying it.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FileId(Arc<str>);

impl FileId {
    /// Creates an empty file identifier.
    pub fn new() -> Self {
        FileId::default()
    }

    /// Creates a file identifier from the path.
    pub fn from_path(path: &Path) -> Self {
        FileId(Arc::from(path.to_string_lossy().as_ref()))
    }

    /// Creates a file identifier from the slice. The slice
    /// is normally the file path.
    pub fn from_string(path: &str) -> Self {
        if path.is_empty() {
            return FileId::default();
        }
        FileId(Arc::from(path))
    }

    /// Returns true if there is no path for this identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub fn shares_arc_with(&self, other: &FileId) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for FileId {
    fn default() -> Self {
        FileId(EMPTY_FILE_ID.clone())
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for FileId {
    fn from(value: String) -> Self {
        FileId::from_string(&value)
    }
}

impl From<FileId> for String {
    fn from(value: FileId) -> Self {
        value.0.to_string()
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        FileId::from_string(value)
    }
}

/// Position of a block in a template: the file and the 1-indexed line.
///
/// A line of 0 means the line is not known.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    #[serde(default, rename = "path")]
    pub file_id: FileId,
    #[serde(default)]
    pub line: usize,
}

impl Pos {
    pub fn new(file_id: impl Into<FileId>, line: usize) -> Self {
        Self {
            file_id: file_id.into(),
            line,
        }
    }

    /// Returns true if the position can be written as a line directive,
    /// that is, it has a path and a positive line number.
    pub fn has_line(&self) -> bool {
        !self.file_id.is_empty() && self.line > 0
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_id, self.line)
    }
}

/// Defines an element that has a position in a template.
pub trait Located {
    fn pos(&self) -> &Pos;
}
