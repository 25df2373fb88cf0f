//! Errors produced while reading font data

use types::Tag;

/// The kind of a glyph record in the `glyf` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GlyphKind {
    /// A glyph described by its own contours.
    Simple,
    /// A glyph assembled from other glyphs.
    Composite,
}

impl std::fmt::Display for GlyphKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GlyphKind::Simple => f.write_str("simple"),
            GlyphKind::Composite => f.write_str("composite"),
        }
    }
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// A read extended past the end of the data.
    EndOfFile,
    /// A seek or advance targeted a position past the end of the data.
    InvalidOffset(usize),
    TableNotFound(Tag),
    /// The `head` table carries the wrong magic number.
    MagicMismatch(u32),
    UnsupportedGlyph(GlyphKind),
    /// The glyph has no contours.
    EmptyGlyph,
    /// The `cmap` table has no encoding record for the Unicode platform.
    NoUnicodeCmap,
    UnsupportedCmapFormat(u16),
    MalformedData(&'static str),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::EndOfFile => write!(f, "Unexpected end of file"),
            ReadError::InvalidOffset(offset) => write!(f, "Offset {offset} is out of bounds"),
            ReadError::TableNotFound(tag) => write!(f, "the {tag} table is missing"),
            ReadError::MagicMismatch(found) => {
                write!(f, "head magic number 0x{found:08X} should be 0x5F0F3CF5")
            }
            ReadError::UnsupportedGlyph(kind) => write!(f, "{kind} glyphs are not supported"),
            ReadError::EmptyGlyph => write!(f, "the glyph has no outline"),
            ReadError::NoUnicodeCmap => write!(f, "no Unicode cmap subtable"),
            ReadError::UnsupportedCmapFormat(format) => {
                write!(f, "cmap subtable format {format} is not supported")
            }
            ReadError::MalformedData(msg) => write!(f, "Malformed data: '{msg}'"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
