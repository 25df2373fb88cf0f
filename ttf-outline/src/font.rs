//! An in-memory font file.

use std::path::Path;

use log::{debug, warn};
use ttf_read::{
    tables::{cmap::Cmap4, head::Head},
    types::GlyphId,
    FontData, OffsetTable, ReadError, TableDirectory, TableProvider,
};

use crate::{
    setting::{HeadValidation, LoadSettings},
    Glyph, OutlineError,
};

/// A TrueType font loaded into memory.
///
/// The bytes never change after loading, and all reads go through cursors
/// created per call, so a `FontFile` can be shared across threads freely.
/// The offset table and `head` are parsed once, when the file is loaded.
#[derive(Clone, Debug)]
pub struct FontFile {
    data: Vec<u8>,
    offset_table: OffsetTable,
    head: Head,
}

impl FontFile {
    /// Read the font file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OutlineError> {
        Self::load_with_settings(path, LoadSettings::default())
    }

    pub fn load_with_settings(
        path: impl AsRef<Path>,
        settings: LoadSettings,
    ) -> Result<Self, OutlineError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        debug!("read {} bytes from {}", data.len(), path.display());
        Ok(Self::from_bytes_with_settings(data, settings)?)
    }

    /// Create a font from bytes already in memory.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Result<Self, ReadError> {
        Self::from_bytes_with_settings(data, LoadSettings::default())
    }

    pub fn from_bytes_with_settings(
        data: impl Into<Vec<u8>>,
        settings: LoadSettings,
    ) -> Result<Self, ReadError> {
        let data = data.into();
        let directory = TableDirectory::new(FontData::new(&data))?;
        let offset_table = *directory.offset_table();
        debug!(
            "sfnt version 0x{:08X} with {} tables",
            offset_table.sfnt_version, offset_table.num_tables
        );
        if !offset_table.is_truetype() {
            warn!(
                "sfnt version 0x{:08X} does not identify TrueType outlines",
                offset_table.sfnt_version
            );
        }
        let head = directory.head()?;
        if let Err(e) = head.validate() {
            match settings.head_validation {
                HeadValidation::Strict => return Err(e),
                HeadValidation::Lenient => warn!("{e}, continuing"),
            }
        }
        Ok(FontFile {
            data,
            offset_table,
            head,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn offset_table(&self) -> &OffsetTable {
        &self.offset_table
    }

    /// The `head` table parsed at load time.
    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn directory(&self) -> TableDirectory<'_> {
        TableDirectory::from_parts(FontData::new(&self.data), self.offset_table)
    }

    /// The number of glyphs addressable through `loca`.
    pub fn num_glyphs(&self) -> Result<usize, ReadError> {
        Ok(self.directory().loca(self.head.is_long_loca())?.len())
    }

    /// Decode the outline of a simple glyph with integer coordinates.
    ///
    /// Glyphs whose `loca` entry has zero length fail with
    /// [`ReadError::EmptyGlyph`], as do records with no contours.
    pub fn glyph(&self, glyph_id: GlyphId) -> Result<Glyph, ReadError> {
        let directory = self.directory();
        let loca = directory.loca(self.head.is_long_loca())?;
        let idx = glyph_id.to_u32() as usize;
        let offset = loca.get_raw(idx)?;
        if loca.get_raw(idx + 1).is_ok_and(|next| next == offset) {
            return Err(ReadError::EmptyGlyph);
        }
        let simple = directory.glyf()?.simple_glyph(offset)?;
        let glyph = Glyph::from_simple(glyph_id, &simple);
        debug!(
            "{glyph_id}: {} contours, {} points, bbox ({}, {}) ({}, {})",
            glyph.contour_count(),
            glyph.point_count(),
            glyph.bbox.x_min,
            glyph.bbox.y_min,
            glyph.bbox.x_max,
            glyph.bbox.y_max
        );
        Ok(glyph)
    }

    /// Decode a glyph with float coordinates, optionally normalizing its
    /// curves.
    pub fn outline(&self, glyph_id: GlyphId, interpolate: bool) -> Result<Glyph<f32>, ReadError> {
        let glyph = self.glyph(glyph_id)?.to_f32();
        Ok(if interpolate {
            glyph.normalized()
        } else {
            glyph
        })
    }

    /// The format 4 subtable of the first Unicode `cmap` record.
    pub fn charmap(&self) -> Result<Cmap4<'_>, ReadError> {
        self.directory().cmap()?.unicode_subtable()
    }

    /// Map a codepoint to a nominal glyph identifier.
    ///
    /// Codepoints above 0xFFFF or past every segment resolve to
    /// [`GlyphId::NOTDEF`]; otherwise the first segment ending at or after
    /// the codepoint decides.
    pub fn glyph_id_for_char(&self, codepoint: impl Into<u32>) -> Result<GlyphId, ReadError> {
        self.charmap()?.map_codepoint(codepoint)
    }

    pub fn outline_for_char(
        &self,
        codepoint: impl Into<u32>,
        interpolate: bool,
    ) -> Result<Glyph<f32>, ReadError> {
        let glyph_id = self.glyph_id_for_char(codepoint)?;
        self.outline(glyph_id, interpolate)
    }
}
