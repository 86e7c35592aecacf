//! Provides definition for diagnostics, which are the errors reported while
//! turning a template into Rust source.
//!
//! A diagnostic has a problem code and a primary label. Labels point either
//! into the generated source (line and column) or into the template (a
//! block position).
use std::fmt;

use stencil_problems::Problem;

use crate::core::{FileId, Pos};

/// A position marker that has both line and column information.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualifiedPosition {
    /// Line (1-indexed)
    pub line: usize,

    /// Column (1-indexed)
    pub column: usize,
}

impl QualifiedPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// A position in the generated source.
    Generated(QualifiedPosition),
    /// A line in the template.
    Template(usize),
}

/// A label that refers to some position and a message related to
/// that position.
#[derive(Clone, Debug)]
pub struct Label {
    pub location: Location,

    /// Identifier for the template file.
    pub file_id: FileId,

    pub message: String,
}

impl Label {
    /// A label in the source generated for a template.
    pub fn generated(
        file_id: impl Into<FileId>,
        position: QualifiedPosition,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location: Location::Generated(position),
            file_id: file_id.into(),
            message: message.into(),
        }
    }

    /// A label at the position of a template block.
    pub fn template(pos: &Pos, message: impl Into<String>) -> Self {
        Self {
            location: Location::Template(pos.line),
            file_id: pos.file_id.clone(),
            message: message.into(),
        }
    }

    /// A label for a template file in its entirety rather than
    /// a particular line.
    pub fn file(file_id: impl Into<FileId>, message: impl Into<String>) -> Self {
        Self {
            location: Location::Template(0),
            file_id: file_id.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Location::Generated(pos) => write!(
                f,
                "{} (generated {}:{}): {}",
                self.file_id, pos.line, pos.column, self.message
            ),
            Location::Template(0) => write!(f, "{}: {}", self.file_id, self.message),
            Location::Template(line) => write!(f, "{}:{}: {}", self.file_id, line, self.message),
        }
    }
}

/// A diagnostic. Diagnostic have a code that is indicative of the category,
/// a primary location and possibly non-zero set of secondary location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// A normally unique value describing the type of diagnostic.
    pub code: String,

    description: String,

    /// The primary or first label.
    pub primary: Label,

    /// Additional descriptions to the constant description.
    pub described: Vec<String>,

    /// Additional information about the diagnostic.
    pub secondary: Vec<Label>,
}

impl Diagnostic {
    /// Creates a diagnostic from the problem code and with the specified label.
    pub fn problem(problem: Problem, primary: Label) -> Self {
        Self {
            code: problem.code().to_string(),
            description: problem.message().to_string(),
            primary,
            described: vec![],
            secondary: vec![],
        }
    }

    /// Adds to the problem description (primary text) additional context
    /// about the problem.
    ///
    /// This is similar to adding primary and second items except that this
    /// forms part of the main description and does not need to be related to
    /// a position in a source file.
    pub fn with_context(mut self, description: &str, item: &str) -> Self {
        self.described.push(format!("{}={}", description, item));
        self
    }

    pub fn with_secondary(mut self, label: Label) -> Self {
        self.secondary.push(label);
        self
    }

    /// Returns the description for the diagnostic. This may add in other
    /// data in addition that is part of the diagnostic.
    pub fn description(&self) -> String {
        if self.described.is_empty() {
            self.description.clone()
        } else {
            format!("{} ({})", self.description, self.described.join(", "))
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.code, self.description(), self.primary)?;
        for label in &self.secondary {
            write!(f, "; {}", label)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}
