//! Transform that applies the trim directives of code and print blocks to
//! the neighboring text blocks.
//!
//! A left trim removes trailing whitespace from the text block before the
//! directive, but only for directives at index 2 or later. A right trim
//! removes leading whitespace from the text block after the directive.
use stencil_blocks::Block;

pub fn apply(mut blocks: Vec<Block>) -> Vec<Block> {
    for i in 0..blocks.len() {
        let trim = blocks[i].trim();

        if trim.left && i > 1 {
            if let Some(text) = blocks[i - 1].as_text_mut() {
                let len = text.content.trim_end().len();
                text.content.truncate(len);
            }
        }

        if trim.right && i + 1 < blocks.len() {
            if let Some(text) = blocks[i + 1].as_text_mut() {
                text.content = text.content.trim_start().to_string();
            }
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use stencil_blocks::block::Trim;
    use stencil_blocks::Block;

    use super::apply;

    fn text(blocks: &[Block], idx: usize) -> &str {
        &blocks[idx].as_text().unwrap().content
    }

    #[test]
    fn apply_when_right_trim_then_next_text_leading_whitespace_removed() {
        let blocks = vec![
            Block::code("let x = 1;").with_trim(Trim::new(false, true)),
            Block::text(" \n\t<p>  "),
        ];

        let blocks = apply(blocks);

        assert_eq!("<p>  ", text(&blocks, 1));
    }

    #[test]
    fn apply_when_left_trim_at_index_two_then_previous_text_trailing_whitespace_removed() {
        let blocks = vec![
            Block::code("let x = 1;"),
            Block::text("  <p>\n  "),
            Block::print("x").with_trim(Trim::new(true, false)),
        ];

        let blocks = apply(blocks);

        assert_eq!("  <p>", text(&blocks, 1));
    }

    // The left trim only applies from index 2 onwards while the right trim
    // applies from index 0. This boundary is kept as observed behavior and
    // is worth confirming against the template parser before changing.
    #[test]
    fn apply_when_left_trim_at_index_one_then_previous_text_kept() {
        let blocks = vec![
            Block::text("<p>\n  "),
            Block::print("x").with_trim(Trim::new(true, false)),
        ];

        let blocks = apply(blocks);

        assert_eq!("<p>\n  ", text(&blocks, 0));
    }

    #[rstest]
    #[case(Block::code("x"))]
    #[case(Block::print("x"))]
    #[case(Block::raw_print("x"))]
    fn apply_when_trim_both_then_both_neighbors_trimmed(#[case] blk: Block) {
        let blocks = vec![
            Block::code("let a = 1;"),
            Block::text("a \n"),
            blk.with_trim(Trim::new(true, true)),
            Block::text("\n b"),
        ];

        let blocks = apply(blocks);

        assert_eq!("a", text(&blocks, 1));
        assert_eq!("b", text(&blocks, 3));
    }

    #[test]
    fn apply_when_neighbor_not_text_then_unchanged() {
        let blocks = vec![
            Block::code("a"),
            Block::code("b"),
            Block::print("c").with_trim(Trim::new(true, true)),
            Block::raw_print("d"),
        ];

        assert_eq!(blocks.clone(), apply(blocks));
    }

    #[test]
    fn apply_when_right_trim_on_last_block_then_unchanged() {
        let blocks = vec![
            Block::text(" a "),
            Block::code("x").with_trim(Trim::new(false, true)),
        ];

        assert_eq!(blocks.clone(), apply(blocks));
    }

    #[test]
    fn apply_when_unicode_whitespace_then_removed() {
        let blocks = vec![
            Block::code("x").with_trim(Trim::new(false, true)),
            Block::text("\u{00a0}\u{2003}a"),
        ];

        let blocks = apply(blocks);

        assert_eq!("a", text(&blocks, 1));
    }
}
