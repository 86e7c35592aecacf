//! A template is the unit of translation: a path and its blocks.
//!
//! Templates can be exchanged as JSON so that a parser running in another
//! process can hand over the block tree.
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::core::FileId;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub path: FileId,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Template {
    pub fn new(path: impl Into<FileId>, blocks: Vec<Block>) -> Self {
        Self {
            path: path.into(),
            blocks,
        }
    }

    /// Reads a template from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Writes the template to its JSON representation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
