//! The generator as individual stages (to enable testing).
//!
//! A template goes through normalization, emission of raw source, parsing,
//! import resolution and finally formatting. The pipeline in the crate
//! root chains the stages and decides what reaches the output.
use log::debug;
use stencil_blocks::core::FileId;
use stencil_blocks::diagnostic::{Diagnostic, Label, QualifiedPosition};
use stencil_blocks::{Block, Template};
use stencil_problems::Problem;

use crate::imports::CANONICAL_IMPORTS;
use crate::options::WriteOptions;
use crate::{
    renderer, source_map, xform_drop_trailing_text_blocks, xform_inject_imports,
    xform_join_text_blocks, xform_trim_text_blocks,
};

/// The first lines of every generated file.
pub const HEADER: &str = "//! Generated by stencil.\n//! DO NOT EDIT\n\n";

/// Normalizes the top-level text blocks: merges adjacent text, applies
/// the trim directives and drops trailing whitespace.
pub fn normalize(blocks: Vec<Block>) -> Vec<Block> {
    let xforms: Vec<fn(Vec<Block>) -> Vec<Block>> = vec![
        xform_join_text_blocks::apply,
        xform_trim_text_blocks::apply,
        xform_drop_trailing_text_blocks::apply,
    ];

    xforms.into_iter().fold(blocks, |blocks, xform| xform(blocks))
}

/// Returns the unformatted source for the template, including the header
/// and any line directives.
pub fn emit(template: &Template, options: &WriteOptions) -> String {
    let mut source = String::from(HEADER);
    source.push_str(&renderer::apply(&template.blocks, options));
    debug!(
        "Emitted {} bytes from {} blocks of {}",
        source.len(),
        template.blocks.len(),
        template.path
    );
    source
}

/// Parses the generated source.
///
/// Returns `Err(Diagnostic)` positioned in the generated source and, when a
/// line directive precedes the error, at the template line that produced it.
pub fn parse(source: &str, file_id: &FileId) -> Result<syn::File, Diagnostic> {
    syn::parse_file(source).map_err(|err| {
        let start = err.span().start();
        let diagnostic = Diagnostic::problem(
            Problem::GeneratedSourceParse,
            Label::generated(
                file_id.clone(),
                QualifiedPosition::new(start.line, start.column + 1),
                err.to_string(),
            ),
        );

        match source_map::template_pos(source, start.line) {
            Some(pos) => diagnostic.with_secondary(Label::template(&pos, "generated from block")),
            None => diagnostic,
        }
    })
}

/// Rewrites the imports of the file to the canonical list.
pub fn resolve_imports(file: &mut syn::File) {
    xform_inject_imports::apply(file, &CANONICAL_IMPORTS);
    debug!("Resolved {} canonical imports", CANONICAL_IMPORTS.len());
}
