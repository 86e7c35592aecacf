//! Blocks are the fragments of a template.
//!
//! A template is a sequence of blocks. Text, code and print blocks are
//! leaves. Component start blocks own their attribute blocks and their body
//! so the sequence forms a tree. End blocks mark where the parser closed a
//! component or attribute and have no output of their own.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Located, Pos};

/// The namespace of a component when the tag does not name a package.
pub const DEFAULT_NAMESPACE: &str = "stencil";

/// Requests to remove whitespace from the neighboring text blocks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trim {
    /// Remove trailing whitespace of the preceding text block.
    #[serde(default)]
    pub left: bool,
    /// Remove leading whitespace of the following text block.
    #[serde(default)]
    pub right: bool,
}

impl Trim {
    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// Text that is written to the output as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub pos: Pos,
    pub content: String,
}

/// Rust code that is copied to the generated source as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub pos: Pos,
    pub content: String,
    #[serde(default)]
    pub trim: Trim,
}

/// An expression whose display value is HTML escaped and written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrintBlock {
    #[serde(default)]
    pub pos: Pos,
    pub content: String,
    #[serde(default)]
    pub trim: Trim,
}

/// An expression whose display value is written without escaping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawPrintBlock {
    #[serde(default)]
    pub pos: Pos,
    pub content: String,
    #[serde(default)]
    pub trim: Trim,
}

/// A named value assigned to a component field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub name_pos: Pos,
    pub value: String,
    #[serde(default)]
    pub value_pos: Pos,
}

impl Field {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            name_pos: Pos::default(),
            value: value.to_string(),
            value_pos: Pos::default(),
        }
    }
}

/// A passthrough attribute on a component. Attributes are collected
/// into a single map on the component.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attr {
    pub name: String,
    #[serde(default)]
    pub name_pos: Pos,
    pub value: String,
    #[serde(default)]
    pub value_pos: Pos,
}

impl Attr {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            name_pos: Pos::default(),
            value: value.to_string(),
            value_pos: Pos::default(),
        }
    }
}

/// The opening tag of a component.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentStartBlock {
    #[serde(default)]
    pub pos: Pos,
    /// Package path of the component type, empty for a type in scope.
    #[serde(default)]
    pub package: String,
    pub name: String,
    /// True if the tag closed itself and so has no body.
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub attrs: Vec<Attr>,
    #[serde(default)]
    pub attr_blocks: Vec<AttrStartBlock>,
    /// The body of the component.
    #[serde(default, rename = "yield")]
    pub yield_blocks: Vec<Block>,
}

impl ComponentStartBlock {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Returns the package, if defined. Otherwise returns the default namespace.
    pub fn namespace(&self) -> &str {
        namespace_or_default(&self.package)
    }

    /// Returns the Rust type of the component: the name qualified with the
    /// package when there is one.
    pub fn type_path(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.package, self.name)
        }
    }
}

impl fmt::Display for ComponentStartBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.namespace(), self.name)
    }
}

/// The closing tag of a component.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentEndBlock {
    #[serde(default)]
    pub pos: Pos,
    #[serde(default)]
    pub package: String,
    pub name: String,
}

impl ComponentEndBlock {
    pub fn namespace(&self) -> &str {
        namespace_or_default(&self.package)
    }
}

impl fmt::Display for ComponentEndBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "</{}:{}>", self.namespace(), self.name)
    }
}

/// The opening tag of a component attribute. The attribute body becomes a
/// deferred field of the enclosing component.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrStartBlock {
    #[serde(default)]
    pub pos: Pos,
    #[serde(default)]
    pub package: String,
    pub name: String,
    #[serde(default, rename = "yield")]
    pub yield_blocks: Vec<Block>,
}

impl AttrStartBlock {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn namespace(&self) -> &str {
        namespace_or_default(&self.package)
    }
}

impl fmt::Display for AttrStartBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}::{}>", self.namespace(), self.name)
    }
}

/// The closing tag of a component attribute.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttrEndBlock {
    #[serde(default)]
    pub pos: Pos,
    #[serde(default)]
    pub package: String,
    pub name: String,
}

impl AttrEndBlock {
    pub fn namespace(&self) -> &str {
        namespace_or_default(&self.package)
    }
}

impl fmt::Display for AttrEndBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "</{}::{}>", self.namespace(), self.name)
    }
}

fn namespace_or_default(package: &str) -> &str {
    if package.is_empty() {
        DEFAULT_NAMESPACE
    } else {
        package
    }
}

/// An element of a template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Block {
    Text(TextBlock),
    Code(CodeBlock),
    Print(PrintBlock),
    RawPrint(RawPrintBlock),
    ComponentStart(ComponentStartBlock),
    ComponentEnd(ComponentEndBlock),
    AttrStart(AttrStartBlock),
    AttrEnd(AttrEndBlock),
}

impl Block {
    pub fn text(content: &str) -> Self {
        Block::Text(TextBlock {
            pos: Pos::default(),
            content: content.to_string(),
        })
    }

    pub fn code(content: &str) -> Self {
        Block::Code(CodeBlock {
            pos: Pos::default(),
            content: content.to_string(),
            trim: Trim::none(),
        })
    }

    pub fn print(content: &str) -> Self {
        Block::Print(PrintBlock {
            pos: Pos::default(),
            content: content.to_string(),
            trim: Trim::none(),
        })
    }

    pub fn raw_print(content: &str) -> Self {
        Block::RawPrint(RawPrintBlock {
            pos: Pos::default(),
            content: content.to_string(),
            trim: Trim::none(),
        })
    }

    /// Returns the block with the position replaced.
    pub fn with_pos(mut self, pos: Pos) -> Self {
        *self.pos_mut() = pos;
        self
    }

    /// Returns the block with the trim directive replaced. Blocks that do
    /// not support trimming are returned unchanged.
    pub fn with_trim(mut self, trim: Trim) -> Self {
        match &mut self {
            Block::Code(blk) => blk.trim = trim,
            Block::Print(blk) => blk.trim = trim,
            Block::RawPrint(blk) => blk.trim = trim,
            _ => {}
        }
        self
    }

    /// Returns the trim directive. Only code and print blocks trim.
    pub fn trim(&self) -> Trim {
        match self {
            Block::Code(blk) => blk.trim,
            Block::Print(blk) => blk.trim,
            Block::RawPrint(blk) => blk.trim,
            Block::Text(_)
            | Block::ComponentStart(_)
            | Block::ComponentEnd(_)
            | Block::AttrStart(_)
            | Block::AttrEnd(_) => Trim::none(),
        }
    }

    pub fn as_text(&self) -> Option<&TextBlock> {
        match self {
            Block::Text(blk) => Some(blk),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextBlock> {
        match self {
            Block::Text(blk) => Some(blk),
            _ => None,
        }
    }

    fn pos_mut(&mut self) -> &mut Pos {
        match self {
            Block::Text(blk) => &mut blk.pos,
            Block::Code(blk) => &mut blk.pos,
            Block::Print(blk) => &mut blk.pos,
            Block::RawPrint(blk) => &mut blk.pos,
            Block::ComponentStart(blk) => &mut blk.pos,
            Block::ComponentEnd(blk) => &mut blk.pos,
            Block::AttrStart(blk) => &mut blk.pos,
            Block::AttrEnd(blk) => &mut blk.pos,
        }
    }
}

impl Located for Block {
    fn pos(&self) -> &Pos {
        match self {
            Block::Text(blk) => &blk.pos,
            Block::Code(blk) => &blk.pos,
            Block::Print(blk) => &blk.pos,
            Block::RawPrint(blk) => &blk.pos,
            Block::ComponentStart(blk) => &blk.pos,
            Block::ComponentEnd(blk) => &blk.pos,
            Block::AttrStart(blk) => &blk.pos,
            Block::AttrEnd(blk) => &blk.pos,
        }
    }
}

impl From<ComponentStartBlock> for Block {
    fn from(value: ComponentStartBlock) -> Self {
        Block::ComponentStart(value)
    }
}

impl From<AttrStartBlock> for Block {
    fn from(value: AttrStartBlock) -> Self {
        Block::AttrStart(value)
    }
}
