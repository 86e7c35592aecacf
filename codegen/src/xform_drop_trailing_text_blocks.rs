//! Transform that removes whitespace-only text blocks from the end of the
//! template.
use stencil_blocks::Block;

pub fn apply(mut blocks: Vec<Block>) -> Vec<Block> {
    while blocks
        .last()
        .and_then(Block::as_text)
        .is_some_and(|text| text.content.trim().is_empty())
    {
        blocks.pop();
    }
    blocks
}
