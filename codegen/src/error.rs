use stencil_blocks::diagnostic::Diagnostic;
use thiserror::Error;

/// Errors from writing a template. Every variant that follows a write
/// reports how many bytes reached the sink before the error.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The generated source is not valid Rust. The unformatted source was
    /// written instead.
    #[error("{diagnostic}")]
    Parse { written: u64, diagnostic: Diagnostic },

    /// The resolved source could not be formatted. The unformatted source
    /// was written instead.
    #[error("{diagnostic}")]
    Format { written: u64, diagnostic: Diagnostic },

    #[error("unable to write generated source: {0}")]
    Io(#[from] std::io::Error),
}

impl WriteError {
    /// Returns the number of bytes written before the error.
    pub fn written(&self) -> u64 {
        match self {
            WriteError::Parse { written, .. } | WriteError::Format { written, .. } => *written,
            WriteError::Io(_) => 0,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            WriteError::Parse { diagnostic, .. } | WriteError::Format { diagnostic, .. } => {
                Some(diagnostic)
            }
            WriteError::Io(_) => None,
        }
    }
}
