//! Render engine: converts raw line content into its screen display form.
//!
//! The only transformation is tab expansion; every other character is
//! copied through unchanged and occupies one render position. Glyph
//! substitution for non-printable characters belongs to the display layer,
//! which reads the `NonPrint` highlight tag.

/// Tab stops are every 8 render columns.
pub const TAB_STOP: usize = 8;

/// Hard cap on the render length of a single line (32-bit length field).
pub const MAX_RENDER_LEN: usize = u32::MAX as usize;

/// Render a raw line for display.
///
/// Returns the rendered string and its length in render positions. A tab
/// expands to at least one space, up to the next multiple-of-8 column.
/// Fails when the rendered line would exceed [`MAX_RENDER_LEN`]; the line
/// is rejected rather than truncated.
pub fn render(content: &str) -> Result<(String, usize), String> {
    let mut rendered = String::with_capacity(content.len());
    let mut col = 0usize;

    for ch in content.chars() {
        if ch == '\t' {
            rendered.push(' ');
            col += 1;
            while col % TAB_STOP != 0 {
                rendered.push(' ');
                col += 1;
            }
        } else {
            rendered.push(ch);
            col += 1;
        }
        if col > MAX_RENDER_LEN {
            return Err(format!(
                "line too long: render length exceeds {} characters",
                MAX_RENDER_LEN
            ));
        }
    }

    Ok((rendered, col))
}
