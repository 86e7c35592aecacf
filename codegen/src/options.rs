//! Options that control how source is generated.

#[derive(Clone, Debug)]
pub struct WriteOptions {
    /// Write a `//line path:N` comment before the statements of each block
    /// that has a known template position.
    pub line_directives: bool,
}

impl WriteOptions {
    pub fn without_line_directives() -> Self {
        Self {
            line_directives: false,
        }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            line_directives: true,
        }
    }
}
