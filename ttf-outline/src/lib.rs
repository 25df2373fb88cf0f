//! Glyph outlines from TrueType font files.
//!
//! This crate sits above [`ttf_read`](raw): it owns the font bytes, caches
//! the `head` table, and turns `loca`/`glyf` records into [`Glyph`] outlines,
//! optionally [normalized](normalize) so that every contour alternates
//! between on-curve and off-curve points.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! let font = ttf_outline::load_font_file(path_to_my_font_file).unwrap();
//! let glyph = ttf_outline::resolve_codepoint(&font, 'A' as u32, true).unwrap();
//! for contour in glyph.contours() {
//!     println!("{:?}", &glyph.points[contour]);
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Expose our "raw" underlying parser crate.
pub extern crate ttf_read as raw;

mod error;
mod font;
mod glyph;
pub mod normalize;
mod setting;

use std::path::Path;

pub use error::{OutlineError, ReadError};
pub use font::FontFile;
pub use glyph::Glyph;
pub use setting::{HeadValidation, LoadSettings};

/// Type for a glyph identifier.
pub type GlyphId = ttf_read::types::GlyphId;

/// Type for a 4-byte tag used to identify font tables.
pub type Tag = ttf_read::types::Tag;

/// Load a font file from disk with the default settings.
pub fn load_font_file(path: impl AsRef<Path>) -> Result<FontFile, OutlineError> {
    FontFile::load(path)
}

pub fn load_font_file_with_settings(
    path: impl AsRef<Path>,
    settings: LoadSettings,
) -> Result<FontFile, OutlineError> {
    FontFile::load_with_settings(path, settings)
}

/// Load the outline of the glyph at `index`.
///
/// With `interpolate`, the outline is normalized so that each contour
/// alternates between on-curve and off-curve points. Indices past the
/// 16-bit glyph id range fail with [`ReadError::EndOfFile`], as do any
/// indices past the end of `loca`.
pub fn load_glyph_by_index(
    file: &FontFile,
    index: u32,
    interpolate: bool,
) -> Result<Glyph<f32>, ReadError> {
    file.outline(glyph_id_from_index(index)?, interpolate)
}

/// Load the glyph at `index` with its integer coordinates as decoded.
pub fn load_raw_glyph_by_index(file: &FontFile, index: u32) -> Result<Glyph, ReadError> {
    file.glyph(glyph_id_from_index(index)?)
}

fn glyph_id_from_index(index: u32) -> Result<GlyphId, ReadError> {
    u16::try_from(index)
        .map(GlyphId::new)
        .map_err(|_| ReadError::EndOfFile)
}

/// Map a codepoint to a glyph index through the Unicode `cmap` subtable.
pub fn resolve_codepoint_to_glyph_index(
    file: &FontFile,
    codepoint: u32,
) -> Result<GlyphId, ReadError> {
    file.glyph_id_for_char(codepoint)
}

/// Load the outline of the glyph mapped to `codepoint`.
///
/// Codepoints that resolve to `.notdef` load glyph 0.
pub fn resolve_codepoint(
    file: &FontFile,
    codepoint: u32,
    interpolate: bool,
) -> Result<Glyph<f32>, ReadError> {
    file.outline_for_char(codepoint, interpolate)
}
