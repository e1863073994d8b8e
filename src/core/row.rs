//! Row: one line of the document plus its derived display state.

use crate::core::highlight::Highlight;
use crate::core::render::render;

/// A single line of the buffer.
///
/// `render` and `hl` are derived wholesale from `content` (and the previous
/// row's carried comment state); they are recomputed, never patched. The
/// invariant `hl.len() == render.chars().count() == render_len` holds after
/// every update.
#[derive(Debug)]
pub struct Row {
    /// Zero-based position in the document; kept in sync on insert.
    pub index: usize,
    /// Raw line text, without the trailing newline or carriage return.
    pub content: String,
    /// Display form of `content` (tabs expanded).
    pub render: String,
    /// Length of `render` in render positions.
    pub render_len: usize,
    /// One classification tag per rendered character.
    pub hl: Vec<Highlight>,
    /// True if the last highlight pass left a block comment open at line end.
    pub open_comment: bool,
}

impl Row {
    /// Build a row at `index`, rendering its content.
    ///
    /// Highlighting is owned by the document, which knows the carried state
    /// of the previous row; a fresh row starts with an empty tag array.
    pub fn new(index: usize, content: String) -> Result<Self, String> {
        let (render, render_len) = render(&content)?;
        Ok(Self {
            index,
            content,
            render,
            render_len,
            hl: Vec::new(),
            open_comment: false,
        })
    }
}
