//! Generates formatted Rust source from the blocks of a stencil template.
//!
//! The generated source writes the template output to a `w: &mut dyn Write`
//! and passes a `ctx` to components; the code blocks of the template
//! declare both, usually as the parameters of a render function.
//!
//! ```
//! use stencil_blocks::{Block, Template};
//!
//! let template = Template::new(
//!     "hello.ego",
//!     vec![
//!         Block::code("pub fn render(ctx: &Context, w: &mut dyn Write) {"),
//!         Block::text("Hello"),
//!         Block::code("}"),
//!     ],
//! );
//!
//! let source = stencil_codegen::write_to_string(&template).unwrap();
//! assert!(source.contains("w.write_str(\"Hello\")"));
//! ```
// Allow large errors because diagnostics carry their labels.
#![allow(clippy::result_large_err)]

use std::io;

use log::warn;
use stencil_blocks::Template;

mod error;
pub mod formatter;
pub mod imports;
pub mod options;
mod renderer;
pub mod source_map;
pub mod stages;
mod xform_drop_trailing_text_blocks;
mod xform_inject_imports;
mod xform_join_text_blocks;
mod xform_trim_text_blocks;

pub use error::WriteError;
pub use formatter::{Formatter, PrettyFormatter};
pub use options::WriteOptions;
pub use renderer::{attr_names, COMPONENT_VAR};

/// Writes the source for the template blocks to the sink.
///
/// Returns the number of bytes written. If the generated source does not
/// parse or cannot be formatted, the unformatted source is written instead
/// and the error reports how many bytes that was.
pub fn write<W: io::Write + ?Sized>(template: &Template, sink: &mut W) -> Result<u64, WriteError> {
    write_with_options(template, sink, &WriteOptions::default())
}

pub fn write_with_options<W: io::Write + ?Sized>(
    template: &Template,
    sink: &mut W,
    options: &WriteOptions,
) -> Result<u64, WriteError> {
    write_with_formatter(template, sink, options, &PrettyFormatter)
}

/// Writes the source for the template blocks using the formatter.
pub fn write_with_formatter<W: io::Write + ?Sized>(
    template: &Template,
    sink: &mut W,
    options: &WriteOptions,
    formatter: &dyn Formatter,
) -> Result<u64, WriteError> {
    let source = stages::emit(template, options);

    let mut file = match stages::parse(&source, &template.path) {
        Ok(file) => file,
        Err(diagnostic) => {
            warn!("Writing unformatted source for {}: {}", template.path, diagnostic);
            let written = write_unformatted(sink, &source);
            return Err(WriteError::Parse {
                written,
                diagnostic,
            });
        }
    };

    stages::resolve_imports(&mut file);

    let formatted = match formatter.format(&file, &template.path) {
        Ok(formatted) => formatted,
        Err(diagnostic) => {
            warn!("Writing unformatted source for {}: {}", template.path, diagnostic);
            let written = write_unformatted(sink, &source);
            return Err(WriteError::Format {
                written,
                diagnostic,
            });
        }
    };

    sink.write_all(formatted.as_bytes())?;
    Ok(formatted.len() as u64)
}

/// Normalizes the template blocks and writes the source for them.
pub fn translate<W: io::Write + ?Sized>(
    mut template: Template,
    sink: &mut W,
    options: &WriteOptions,
) -> Result<u64, WriteError> {
    template.blocks = stages::normalize(std::mem::take(&mut template.blocks));
    write_with_options(&template, sink, options)
}

/// Returns the source for the template blocks.
pub fn write_to_string(template: &Template) -> Result<String, WriteError> {
    let mut buffer = Vec::new();
    write(template, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the source as-is. Returns the number of bytes that reached the
/// sink, which is fewer than the source if the sink failed.
fn write_unformatted<W: io::Write + ?Sized>(sink: &mut W, source: &str) -> u64 {
    let mut remaining = source.as_bytes();
    let mut written = 0u64;

    while !remaining.is_empty() {
        match sink.write(remaining) {
            Ok(0) => {
                warn!("Sink closed after {} bytes of unformatted source", written);
                break;
            }
            Ok(n) => {
                written += n as u64;
                remaining = &remaining[n..];
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                warn!(
                    "Unable to write unformatted source after {} bytes: {}",
                    written, err
                );
                break;
            }
        }
    }

    written
}
