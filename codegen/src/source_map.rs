//! Line directives map lines of generated source back to the template.
//!
//! The generator writes a `//line path:N` comment before the statements of
//! each block. The directive in effect for a generated line is the nearest
//! directive at or above it.
use stencil_blocks::core::Pos;

const DIRECTIVE_PREFIX: &str = "//line ";

/// Returns the directive comment for the position.
pub fn directive(pos: &Pos) -> String {
    format!("{}{}:{}", DIRECTIVE_PREFIX, pos.file_id, pos.line)
}

/// Returns the template position in effect for the 1-indexed line of
/// generated source.
pub fn template_pos(generated: &str, line: usize) -> Option<Pos> {
    generated
        .lines()
        .take(line)
        .filter_map(parse_directive)
        .last()
}

fn parse_directive(line: &str) -> Option<Pos> {
    let rest = line.trim_start().strip_prefix(DIRECTIVE_PREFIX)?;
    let (path, line_no) = rest.rsplit_once(':')?;
    let line_no = line_no.trim().parse().ok()?;
    Some(Pos::new(path, line_no))
}
