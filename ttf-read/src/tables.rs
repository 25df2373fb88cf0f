//! The font tables needed to read glyph outlines

pub mod cmap;
pub mod glyf;
pub mod head;
pub mod loca;
