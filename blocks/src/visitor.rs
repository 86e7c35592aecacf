//! A trait and functions for visiting all blocks in a template.
//!
//! To use the visitor, define a struct and implement the Visitor trait
//! for the struct. The default implementations descend into the attribute
//! blocks and the body of components; override a `visit_*` function and
//! call the free function of the same name to keep descending.
//!
//! # Example
//!
//! ```
//! use stencil_blocks::block::PrintBlock;
//! use stencil_blocks::visitor::Visitor;
//!
//! struct CountPrints(usize);
//!
//! impl Visitor<()> for CountPrints {
//!     type Value = ();
//!
//!     fn visit_print_block(&mut self, _node: &PrintBlock) -> Result<(), ()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//! ```
use paste::paste;

use crate::block::*;

/// Defines a `Visitor` function that dispatches to the free function of
/// the same name so that implementations can re-use the recursion.
macro_rules! dispatch {
    ($struct_name:ident) => {
        paste! {
            fn [<visit_ $struct_name:snake >](&mut self, node: &$struct_name) -> Result<Self::Value, E> {
                [< visit_ $struct_name:snake >](self, node)
            }
        }
    };
}

/// Defines a `Visitor` function for a block without children.
macro_rules! leaf {
    ($struct_name:ident) => {
        paste! {
            fn [<visit_ $struct_name:snake >](&mut self, _node: &$struct_name) -> Result<Self::Value, E> {
                Ok(Self::Value::default())
            }
        }
    };
}

pub trait Visitor<E> {
    type Value: Default;

    /// Visits every block in the sequence in order.
    fn walk(&mut self, blocks: &[Block]) -> Result<Self::Value, E> {
        visit_blocks(self, blocks)
    }

    fn visit_block(&mut self, node: &Block) -> Result<Self::Value, E> {
        visit_block(self, node)
    }

    leaf!(TextBlock);
    leaf!(CodeBlock);
    leaf!(PrintBlock);
    leaf!(RawPrintBlock);
    dispatch!(ComponentStartBlock);
    leaf!(ComponentEndBlock);
    dispatch!(AttrStartBlock);
    leaf!(AttrEndBlock);
}

pub fn visit_blocks<V: Visitor<E> + ?Sized, E>(v: &mut V, blocks: &[Block]) -> Result<V::Value, E> {
    for blk in blocks {
        v.visit_block(blk)?;
    }
    Ok(V::Value::default())
}

pub fn visit_block<V: Visitor<E> + ?Sized, E>(v: &mut V, node: &Block) -> Result<V::Value, E> {
    match node {
        Block::Text(blk) => v.visit_text_block(blk),
        Block::Code(blk) => v.visit_code_block(blk),
        Block::Print(blk) => v.visit_print_block(blk),
        Block::RawPrint(blk) => v.visit_raw_print_block(blk),
        Block::ComponentStart(blk) => v.visit_component_start_block(blk),
        Block::ComponentEnd(blk) => v.visit_component_end_block(blk),
        Block::AttrStart(blk) => v.visit_attr_start_block(blk),
        Block::AttrEnd(blk) => v.visit_attr_end_block(blk),
    }
}

/// Visits the attribute blocks and then the body of the component.
pub fn visit_component_start_block<V: Visitor<E> + ?Sized, E>(
    v: &mut V,
    node: &ComponentStartBlock,
) -> Result<V::Value, E> {
    for attr_block in &node.attr_blocks {
        v.visit_attr_start_block(attr_block)?;
    }
    visit_blocks(v, &node.yield_blocks)
}

pub fn visit_attr_start_block<V: Visitor<E> + ?Sized, E>(
    v: &mut V,
    node: &AttrStartBlock,
) -> Result<V::Value, E> {
    visit_blocks(v, &node.yield_blocks)
}
