//! The headless editing core: the line buffer, the render engine, and the
//! syntax highlighter. Everything here is backend-agnostic; terminal
//! control, input decoding, and screen drawing live above this layer.

pub mod document;
pub mod highlight;
pub mod render;
pub mod row;
pub mod syntax;
