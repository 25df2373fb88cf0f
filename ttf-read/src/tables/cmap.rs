//! The [cmap](https://docs.microsoft.com/en-us/typography/opentype/spec/cmap) table

use std::ops::Range;

use log::trace;
use types::{BigEndian, GlyphId, Tag};

use crate::{table_provider::TopLevelTable, FontData, ReadError};

/// The platform id of Unicode encoding records.
pub const UNICODE_PLATFORM_ID: u16 = 0;

/// An encoding record in the `cmap` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodingRecord {
    pub platform_id: u16,
    pub encoding_id: u16,
    /// Offset of the subtable from the start of the `cmap` table.
    pub subtable_offset: u32,
}

/// The [cmap] table.
///
/// [cmap]: https://docs.microsoft.com/en-us/typography/opentype/spec/cmap
#[derive(Clone, Copy, Debug)]
pub struct Cmap<'a> {
    data: FontData<'a>,
    version: u16,
    num_tables: u16,
}

impl TopLevelTable for Cmap<'_> {
    const TAG: Tag = Tag::new(b"cmap");
}

impl<'a> Cmap<'a> {
    pub fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        Ok(Cmap {
            data,
            version: cursor.read()?,
            num_tables: cursor.read()?,
        })
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    pub fn num_tables(&self) -> u16 {
        self.num_tables
    }

    /// The encoding records, in table order.
    pub fn encoding_records(&self) -> impl Iterator<Item = Result<EncodingRecord, ReadError>> + 'a {
        let data = self.data;
        (0..self.num_tables as usize).map(move |i| {
            let mut cursor = data.cursor();
            cursor.seek(4 + i * 8)?;
            Ok(EncodingRecord {
                platform_id: cursor.read()?,
                encoding_id: cursor.read()?,
                subtable_offset: cursor.read()?,
            })
        })
    }

    /// The subtable of the first Unicode platform record.
    ///
    /// Only format 4 subtables are supported.
    pub fn unicode_subtable(&self) -> Result<Cmap4<'a>, ReadError> {
        for record in self.encoding_records() {
            let record = record?;
            if record.platform_id == UNICODE_PLATFORM_ID {
                trace!(
                    "cmap: using record ({}, {}) at offset {}",
                    record.platform_id,
                    record.encoding_id,
                    record.subtable_offset
                );
                let subtable = self
                    .data
                    .split_off(record.subtable_offset as usize)
                    .ok_or(ReadError::InvalidOffset(record.subtable_offset as usize))?;
                return Cmap4::read(subtable);
            }
        }
        Err(ReadError::NoUnicodeCmap)
    }

    /// Maps a codepoint to a nominal glyph identifier using the Unicode
    /// subtable.
    pub fn map_codepoint(&self, codepoint: impl Into<u32>) -> Result<GlyphId, ReadError> {
        self.unicode_subtable()?.map_codepoint(codepoint)
    }
}

/// A [format 4](https://learn.microsoft.com/en-us/typography/opentype/spec/cmap#format-4-segment-mapping-to-delta-values)
/// subtable: segment mapping to delta values.
#[derive(Clone, Debug)]
pub struct Cmap4<'a> {
    data: FontData<'a>,
    length: u16,
    language: u16,
    seg_count_x2: u16,
    search_range: u16,
    entry_selector: u16,
    range_shift: u16,
    end_code: &'a [BigEndian<u16>],
    start_code: &'a [BigEndian<u16>],
    id_delta: &'a [BigEndian<i16>],
    id_range_offsets: &'a [BigEndian<u16>],
    id_range_offsets_pos: usize,
}

impl<'a> Cmap4<'a> {
    pub const FORMAT: u16 = 4;

    /// Read a subtable starting at its format field.
    ///
    /// `data` runs to the end of the `cmap` table; the `length` field is not
    /// used to bound reads.
    pub fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let format = cursor.read::<u16>()?;
        if format != Self::FORMAT {
            return Err(ReadError::UnsupportedCmapFormat(format));
        }
        let length = cursor.read()?;
        let language = cursor.read()?;
        let seg_count_x2 = cursor.read::<u16>()?;
        let search_range = cursor.read()?;
        let entry_selector = cursor.read()?;
        let range_shift = cursor.read()?;
        let seg_count = seg_count_x2 as usize / 2;
        let end_code = cursor.read_array(seg_count)?;
        let _reserved_pad = cursor.read::<u16>()?;
        let start_code = cursor.read_array(seg_count)?;
        let id_delta = cursor.read_array(seg_count)?;
        let id_range_offsets_pos = cursor.position();
        let id_range_offsets = cursor.read_array(seg_count)?;
        Ok(Cmap4 {
            data,
            length,
            language,
            seg_count_x2,
            search_range,
            entry_selector,
            range_shift,
            end_code,
            start_code,
            id_delta,
            id_range_offsets,
            id_range_offsets_pos,
        })
    }

    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn language(&self) -> u16 {
        self.language
    }

    pub fn seg_count_x2(&self) -> u16 {
        self.seg_count_x2
    }

    pub fn search_range(&self) -> u16 {
        self.search_range
    }

    pub fn entry_selector(&self) -> u16 {
        self.entry_selector
    }

    pub fn range_shift(&self) -> u16 {
        self.range_shift
    }

    pub fn end_code(&self) -> &'a [BigEndian<u16>] {
        self.end_code
    }

    pub fn start_code(&self) -> &'a [BigEndian<u16>] {
        self.start_code
    }

    pub fn id_delta(&self) -> &'a [BigEndian<i16>] {
        self.id_delta
    }

    pub fn id_range_offsets(&self) -> &'a [BigEndian<u16>] {
        self.id_range_offsets
    }

    /// Maps a codepoint to a nominal glyph identifier.
    ///
    /// Segments are scanned in order and the first whose end code is not
    /// below the codepoint is used, so unsorted tables give a result rather
    /// than an error. The start code of that segment is not checked on the
    /// `idDelta` path. Codepoints above 0xFFFF or past every end code return
    /// [`GlyphId::NOTDEF`].
    pub fn map_codepoint(&self, codepoint: impl Into<u32>) -> Result<GlyphId, ReadError> {
        let codepoint = codepoint.into();
        if codepoint > 0xFFFF {
            return Ok(GlyphId::NOTDEF);
        }
        let codepoint = codepoint as u16;
        let Some(index) = self
            .end_code
            .iter()
            .position(|end| end.get() >= codepoint)
        else {
            return Ok(GlyphId::NOTDEF);
        };
        let start_code = self.start_code[index].get();
        trace!("cmap: U+{codepoint:04X} in segment {index} starting at U+{start_code:04X}");
        self.lookup_glyph_id(codepoint, index, start_code)
    }

    /// Returns an iterator over all (codepoint, glyph identifier) pairs
    /// in the subtable.
    pub fn iter(&self) -> Cmap4Iter<'a> {
        Cmap4Iter::new(self.clone())
    }

    /// Does the final phase of glyph id lookup.
    ///
    /// Shared between Self::map_codepoint and Cmap4Iter.
    fn lookup_glyph_id(
        &self,
        codepoint: u16,
        index: usize,
        start_code: u16,
    ) -> Result<GlyphId, ReadError> {
        let delta = self.id_delta.get(index).ok_or(ReadError::EndOfFile)?.get();
        let range_offset = self
            .id_range_offsets
            .get(index)
            .ok_or(ReadError::EndOfFile)?
            .get() as usize;
        if range_offset == 0 {
            return Ok(GlyphId::new(codepoint.wrapping_add_signed(delta)));
        }
        let Some(code_offset) = codepoint.checked_sub(start_code) else {
            return Err(ReadError::MalformedData(
                "codepoint precedes the start of its cmap segment",
            ));
        };
        // the offset is relative to the idRangeOffset entry itself
        let glyph_pos =
            self.id_range_offsets_pos + index * 2 + range_offset + code_offset as usize * 2;
        let gid = self.data.read_at::<u16>(glyph_pos)?;
        if gid == 0 {
            return Ok(GlyphId::NOTDEF);
        }
        Ok(GlyphId::new(gid.wrapping_add_signed(delta)))
    }

    /// Returns the [start_code, end_code] range at the given index.
    fn code_range(&self, index: usize) -> Option<Range<u32>> {
        // Extend to u32 to ensure we don't overflow on the end + 1 bound
        // below.
        let start = self.start_code.get(index)?.get() as u32;
        let end = self.end_code.get(index)?.get() as u32;
        // Use end + 1 here because the range in the table is inclusive
        Some(start..end + 1)
    }
}

/// Iterator over all (codepoint, glyph identifier) pairs in
/// the subtable.
#[derive(Clone)]
pub struct Cmap4Iter<'a> {
    subtable: Cmap4<'a>,
    cur_range: Range<u32>,
    cur_start_code: u16,
    cur_range_ix: usize,
}

impl<'a> Cmap4Iter<'a> {
    fn new(subtable: Cmap4<'a>) -> Self {
        let cur_range = subtable.code_range(0).unwrap_or_default();
        let cur_start_code = cur_range.start as u16;
        Self {
            subtable,
            cur_range,
            cur_start_code,
            cur_range_ix: 0,
        }
    }
}

impl Iterator for Cmap4Iter<'_> {
    type Item = (u32, GlyphId);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(codepoint) = self.cur_range.next() {
                let glyph_id = self
                    .subtable
                    .lookup_glyph_id(codepoint as u16, self.cur_range_ix, self.cur_start_code)
                    .ok()?;
                // The table might explicitly map some codepoints to 0. Avoid
                // returning those here.
                if glyph_id == GlyphId::NOTDEF {
                    continue;
                }
                return Some((codepoint, glyph_id));
            } else {
                self.cur_range_ix += 1;
                self.cur_range = self.subtable.code_range(self.cur_range_ix)?;
                self.cur_start_code = self.cur_range.start as u16;
            }
        }
    }
}
