//! Formats a resolved syntax tree as canonical Rust source.
use stencil_blocks::core::FileId;
use stencil_blocks::diagnostic::{Diagnostic, Label};
use stencil_problems::Problem;

/// Prints a syntax tree as text.
pub trait Formatter {
    fn format(&self, file: &syn::File, file_id: &FileId) -> Result<String, Diagnostic>;
}

/// Prints with `prettyplease` and checks that the printed text parses
/// again.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrettyFormatter;

impl Formatter for PrettyFormatter {
    fn format(&self, file: &syn::File, file_id: &FileId) -> Result<String, Diagnostic> {
        let text = prettyplease::unparse(file);
        syn::parse_file(&text).map_err(|err| {
            Diagnostic::problem(
                Problem::GeneratedSourceFormat,
                Label::file(file_id.clone(), "formatted source"),
            )
            .with_context("reason", &err.to_string())
        })?;
        Ok(text)
    }
}
