//! Transform that joins adjacent text blocks.
//!
//! The parser splits text wherever it finds a tag, so removing or
//! lifting tags leaves text blocks next to each other. The joined block
//! keeps the position of the first block of the run.
use stencil_blocks::Block;

pub fn apply(blocks: Vec<Block>) -> Vec<Block> {
    let mut joined: Vec<Block> = Vec::with_capacity(blocks.len());

    for blk in blocks {
        if let (Some(prev), Some(curr)) = (
            joined.last_mut().and_then(Block::as_text_mut),
            blk.as_text(),
        ) {
            prev.content.push_str(&curr.content);
            continue;
        }
        joined.push(blk);
    }

    joined
}
