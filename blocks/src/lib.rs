//! Provides definitions of the blocks that make up a template and base
//! implementations of common patterns for working with them.

pub mod block;
pub mod core;
pub mod diagnostic;
pub mod template;
pub mod visitor;

pub use block::Block;
pub use template::Template;
