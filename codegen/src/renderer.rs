//! Renders blocks as Rust statements.
//!
//! The output is not formatted; it only needs to parse. Generated statements
//! expect the enclosing code to provide `w: &mut dyn Write` and `ctx`, the
//! way the code blocks of a template declare them.
//!
//! A component becomes a scope that declares a default instance, assigns
//! fields, the attribute map, the attribute blocks and the body, in that
//! order, and then renders the instance. Deferred bodies are closures that
//! take the output stream as their argument because the stream is borrowed
//! again by the render call.
use std::convert::Infallible;

use proc_macro2::Literal;
use stencil_blocks::block::*;
use stencil_blocks::core::Located;
use stencil_blocks::visitor::{visit_block, Visitor};

use crate::imports::{HTML_ESCAPE, STRING_WRITER};
use crate::options::WriteOptions;
use crate::source_map::directive;

/// The variable that holds a component while its fields are assigned.
pub const COMPONENT_VAR: &str = "__component";

/// Returns the names of component attributes in sorted order, such as the
/// keys of the `attrs` map that a component receives.
pub fn attr_names<K: AsRef<str>, V>(attrs: impl IntoIterator<Item = (K, V)>) -> Vec<String> {
    let mut names: Vec<String> = attrs
        .into_iter()
        .map(|(name, _)| name.as_ref().to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}

pub fn apply(blocks: &[Block], options: &WriteOptions) -> String {
    let mut renderer = BlockRenderer::new(options);
    match renderer.walk(blocks) {
        Ok(()) => renderer.buffer,
        Err(never) => match never {},
    }
}

struct BlockRenderer<'a> {
    buffer: String,
    options: &'a WriteOptions,
}

impl<'a> BlockRenderer<'a> {
    fn new(options: &'a WriteOptions) -> Self {
        Self {
            buffer: String::new(),
            options,
        }
    }

    fn write(&mut self, val: &str) {
        self.buffer.push_str(val);
    }

    fn write_line(&mut self, val: &str) {
        self.buffer.push_str(val);
        self.buffer.push('\n');
    }

    /// Writes the assignment of a deferred body to a component field.
    fn write_deferred(&mut self, field: &str, body: &[Block]) -> Result<(), Infallible> {
        self.write_line(&format!(
            "{}.{} = Some(Box::new(|w: &mut dyn {}| {{",
            COMPONENT_VAR,
            field,
            STRING_WRITER.name()
        ));
        self.walk(body)?;
        self.write_line("}));");
        Ok(())
    }
}

impl Visitor<Infallible> for BlockRenderer<'_> {
    type Value = ();

    fn visit_block(&mut self, node: &Block) -> Result<(), Infallible> {
        let pos = node.pos();
        if self.options.line_directives && pos.has_line() {
            self.write_line(&directive(pos));
        }
        visit_block(self, node)
    }

    fn visit_text_block(&mut self, node: &TextBlock) -> Result<(), Infallible> {
        let literal = Literal::string(&node.content);
        self.write_line(&format!("let _ = w.write_str({});", literal));
        Ok(())
    }

    fn visit_code_block(&mut self, node: &CodeBlock) -> Result<(), Infallible> {
        self.write_line(&node.content);
        Ok(())
    }

    fn visit_print_block(&mut self, node: &PrintBlock) -> Result<(), Infallible> {
        self.write_line(&format!(
            "let _ = w.write_str(&{}(&format!(\"{{}}\", {})));",
            HTML_ESCAPE.name(),
            node.content
        ));
        Ok(())
    }

    fn visit_raw_print_block(&mut self, node: &RawPrintBlock) -> Result<(), Infallible> {
        self.write_line(&format!("let _ = write!(w, \"{{}}\", {});", node.content));
        Ok(())
    }

    fn visit_component_start_block(&mut self, node: &ComponentStartBlock) -> Result<(), Infallible> {
        let assigns = !node.fields.is_empty()
            || !node.attrs.is_empty()
            || !node.attr_blocks.is_empty()
            || !node.yield_blocks.is_empty();

        self.write_line("{");
        self.write_line(&format!(
            "let {}{}: {} = Default::default();",
            if assigns { "mut " } else { "" },
            COMPONENT_VAR,
            node.type_path()
        ));

        for field in &node.fields {
            self.write_line(&format!("{}.{} = {};", COMPONENT_VAR, field.name, field.value));
        }

        if !node.attrs.is_empty() {
            self.write_line(&format!("{}.attrs = [", COMPONENT_VAR));
            for attr in &node.attrs {
                self.write("(");
                self.write(&Literal::string(&attr.name).to_string());
                self.write_line(&format!(".to_string(), format!(\"{{}}\", {})),", attr.value));
            }
            self.write_line("].into_iter().collect();");
        }

        for attr_block in &node.attr_blocks {
            self.write_deferred(&attr_block.name, &attr_block.yield_blocks)?;
        }

        if !node.yield_blocks.is_empty() {
            self.write_deferred("r#yield", &node.yield_blocks)?;
        }

        self.write_line(&format!("{}.render(ctx, w);", COMPONENT_VAR));
        self.write_line("}");
        Ok(())
    }

    // Attribute blocks are lifted into their component by the parser and
    // rendered as deferred fields. A stray one has nothing to render.
    fn visit_attr_start_block(&mut self, _node: &AttrStartBlock) -> Result<(), Infallible> {
        Ok(())
    }
}
