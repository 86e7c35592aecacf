//! Tests of writing templates through the whole pipeline.
mod common;

use std::io;

use common::{position, read_template};
use stencil_blocks::block::{ComponentStartBlock, Field};
use stencil_blocks::core::{FileId, Pos};
use stencil_blocks::diagnostic::{Diagnostic, Label, Location};
use stencil_blocks::{Block, Template};
use stencil_codegen::{
    translate, write, write_to_string, write_with_formatter, write_with_options, Formatter,
    WriteError, WriteOptions,
};
use stencil_problems::Problem;

fn render_fn(body: Vec<Block>) -> Vec<Block> {
    let mut blocks = vec![Block::code(
        "pub fn render(ctx: &Context, w: &mut dyn Write) {",
    )];
    blocks.extend(body);
    blocks.push(Block::code("}"));
    blocks
}

struct FailingFormatter;

impl Formatter for FailingFormatter {
    fn format(&self, _file: &syn::File, file_id: &FileId) -> Result<String, Diagnostic> {
        Err(Diagnostic::problem(
            Problem::GeneratedSourceFormat,
            Label::file(file_id.clone(), "formatted source"),
        ))
    }
}

struct ClosedSink;

impl io::Write for ClosedSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts a fixed number of bytes, then fails.
struct ShortSink {
    buffer: Vec<u8>,
    capacity: usize,
}

impl io::Write for ShortSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.capacity - self.buffer.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "full"));
        }
        let n = room.min(buf.len()).min(7);
        self.buffer.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_when_hello_then_header_imports_and_text() {
    let template = read_template("hello.json");
    let mut sink = Vec::new();

    let written = write(&template, &mut sink).unwrap();

    let source = String::from_utf8(sink).unwrap();
    assert_eq!(source.len() as u64, written);
    assert!(source.starts_with("//! Generated by stencil.\n//! DO NOT EDIT\n"));
    assert!(source.contains("let _ = w.write_str(\"Hello\");"));

    let display = position(&source, "use std::fmt::Display;");
    let escape = position(&source, "use html_escape::encode_text;");
    let writer = position(&source, "use std::fmt::Write;");
    let context = position(&source, "use stencil_runtime::Context;");
    let render = position(&source, "pub fn render(");
    let forced = position(&source, "const _:");
    assert!(display < escape && escape < writer && writer < context);
    assert!(context < render && render < forced);
}

#[test]
fn write_when_valid_fragments_then_output_parses() {
    let template = Template::new(
        "index.ego",
        render_fn(vec![
            Block::text("<ul>"),
            Block::code("for item in items.iter() {"),
            Block::print("item"),
            Block::raw_print("item.html()"),
            Block::code("}"),
            Block::text("</ul>"),
        ]),
    );

    let source = write_to_string(&template).unwrap();

    assert!(syn::parse_file(&source).is_ok(), "{}", source);
    assert!(!source.contains("//line"));
}

#[test]
fn write_when_print_then_escaped_display_of_expression() {
    let template = Template::new("index.ego", render_fn(vec![Block::print("1+1")]));

    let source = write_to_string(&template).unwrap();

    assert!(source.contains("encode_text(&format!(\"{}\", 1 + 1))"), "{}", source);
}

#[test]
fn write_when_component_with_field_then_no_attrs_or_yield() {
    let widget = ComponentStartBlock {
        fields: vec![Field::new("Title", "\"x\"")],
        ..ComponentStartBlock::new("Widget")
    };
    let template = Template::new("index.ego", render_fn(vec![widget.into()]));

    let source = write_to_string(&template).unwrap();

    assert!(source.contains("let mut __component: Widget = Default::default();"));
    assert!(source.contains("__component.Title = \"x\";"));
    assert!(!source.contains("__component.attrs"));
    assert!(!source.contains("r#yield"));
}

#[test]
fn translate_when_component_fixture_then_normalized_and_ordered() {
    let template = read_template("component.json");
    let mut sink = Vec::new();

    translate(template, &mut sink, &WriteOptions::default()).unwrap();

    let source = String::from_utf8(sink).unwrap();
    assert!(source.contains("w.write_str(\"<div>\\n\")"), "{}", source);
    assert!(source.contains(": ui::Card = Default::default();"));

    let field = position(&source, "__component.title =");
    let attrs = position(&source, "__component.attrs =");
    let header = position(&source, "__component.header =");
    let body = position(&source, "__component.r#yield =");
    let render = position(&source, "__component.render(ctx, w);");
    assert!(field < attrs && attrs < header && header < body && body < render);
}

#[test]
fn write_when_malformed_code_then_parse_error_and_raw_source_written() {
    let template = read_template("malformed.json");
    let mut sink = Vec::new();

    let err = write(&template, &mut sink).unwrap_err();

    assert!(matches!(err, WriteError::Parse { .. }));
    assert!(err.written() > 0);
    assert_eq!(sink.len() as u64, err.written());
    assert_eq!("P0001", err.diagnostic().unwrap().code);

    let source = String::from_utf8(sink).unwrap();
    assert!(source.contains("//line views/broken.ego:3\nfor item in items.iter( {"));
}

#[test]
fn write_when_invalid_statement_then_diagnostic_names_template_line() {
    let template = Template::new(
        "views/index.ego",
        render_fn(vec![
            Block::code("let total = ;").with_pos(Pos::new("views/index.ego", 12))
        ]),
    );
    let mut sink = Vec::new();

    let err = write(&template, &mut sink).unwrap_err();

    let diagnostic = err.diagnostic().unwrap();
    assert_eq!(1, diagnostic.secondary.len());
    assert_eq!(Location::Template(12), diagnostic.secondary[0].location);
}

#[test]
fn write_when_directives_disabled_then_fallback_has_no_directives() {
    let template = read_template("malformed.json");
    let mut sink = Vec::new();

    let err = write_with_options(
        &template,
        &mut sink,
        &WriteOptions::without_line_directives(),
    )
    .unwrap_err();

    assert!(err.written() > 0);
    assert!(!String::from_utf8(sink).unwrap().contains("//line"));
}

#[test]
fn write_when_formatter_fails_then_format_error_and_raw_source_written() {
    let template = read_template("hello.json");
    let mut sink = Vec::new();

    let err = write_with_formatter(
        &template,
        &mut sink,
        &WriteOptions::default(),
        &FailingFormatter,
    )
    .unwrap_err();

    assert!(matches!(err, WriteError::Format { .. }));
    assert_eq!("P0002", err.diagnostic().unwrap().code);
    assert_eq!(sink.len() as u64, err.written());

    let source = String::from_utf8(sink).unwrap();
    assert!(source.contains("//line views/hello.ego:2\nlet _ = w.write_str(\"Hello\");"));
}

#[test]
fn write_when_sink_closed_then_io_error() {
    let template = read_template("hello.json");

    let err = write(&template, &mut ClosedSink).unwrap_err();

    assert!(matches!(err, WriteError::Io(_)));
    assert_eq!(0, err.written());
}

#[test]
fn write_when_sink_closed_and_source_malformed_then_nothing_written() {
    let template = read_template("malformed.json");

    let err = write(&template, &mut ClosedSink).unwrap_err();

    assert!(matches!(err, WriteError::Parse { written: 0, .. }));
}

#[test]
fn write_when_output_written_again_then_imports_not_duplicated() {
    let first = write_to_string(&read_template("hello.json")).unwrap();

    let again = Template::new("views/hello.ego", vec![Block::code(&first)]);
    let second = write_to_string(&again).unwrap();

    assert_eq!(1, second.matches("use std::fmt::Display;").count());
    assert_eq!(1, second.matches("use std::fmt::Write;").count());
    assert_eq!(1, second.matches("use html_escape::encode_text;").count());
    assert_eq!(1, second.matches("use stencil_runtime::Context;").count());
    assert_eq!(4, second.matches("const _:").count());
}

#[test]
fn translate_when_empty_template_then_imports_only() {
    let mut sink = Vec::new();

    translate(
        Template::new("empty.ego", vec![Block::text("  \n")]),
        &mut sink,
        &WriteOptions::default(),
    )
    .unwrap();

    let file = syn::parse_file(&String::from_utf8(sink).unwrap()).unwrap();
    assert_eq!(8, file.items.len());
}

#[test]
fn write_when_sink_fills_during_fallback_then_error_counts_bytes_that_reached_sink() {
    let template = read_template("malformed.json");
    let mut sink = ShortSink {
        buffer: Vec::new(),
        capacity: 20,
    };

    let err = write(&template, &mut sink).unwrap_err();

    assert!(matches!(err, WriteError::Parse { .. }));
    assert_eq!(20, err.written());
    assert_eq!(20, sink.buffer.len());
}

#[test]
fn write_when_code_imports_module_and_canonical_item_then_module_import_kept_in_group() {
    let template = Template::new(
        "index.ego",
        vec![
            Block::code("use std::fmt::{self, Write};"),
            Block::code("pub fn render(ctx: &Context, w: &mut dyn Write) -> fmt::Result {"),
            Block::text("Hello"),
            Block::code("Ok(())"),
            Block::code("}"),
        ],
    );

    let source = write_to_string(&template).unwrap();

    assert!(source.contains("use std::fmt::{self};"), "{}", source);
    assert!(!source.contains("fmt::self;"), "{}", source);
    assert_eq!(1, source.matches("use std::fmt::Write;").count());
    assert!(syn::parse_file(&source).is_ok());
}
