//! The [loca (Index to Location)][loca] table
//!
//! [loca]: https://docs.microsoft.com/en-us/typography/opentype/spec/loca

use crate::{table_provider::TopLevelTable, FontData, ReadError};
use types::{BigEndian, GlyphId, Tag};

/// The [loca] table.
///
/// [loca]: https://docs.microsoft.com/en-us/typography/opentype/spec/loca
#[derive(Clone, Debug)]
pub enum Loca<'a> {
    /// Offsets divided by two.
    Short(&'a [BigEndian<u16>]),
    Long(&'a [BigEndian<u32>]),
}

impl TopLevelTable for Loca<'_> {
    const TAG: Tag = Tag::new(b"loca");
}

impl<'a> Loca<'a> {
    /// Read the table; `is_long` comes from `head.indexToLocFormat`.
    ///
    /// A trailing partial entry is ignored.
    pub fn read(data: FontData<'a>, is_long: bool) -> Result<Self, ReadError> {
        if is_long {
            data.read_array(0..data.len() / 4 * 4).map(Loca::Long)
        } else {
            data.read_array(0..data.len() / 2 * 2).map(Loca::Short)
        }
    }

    /// The number of glyphs with an entry in this table.
    pub fn len(&self) -> usize {
        match self {
            Loca::Short(data) => data.len().saturating_sub(1),
            Loca::Long(data) => data.len().saturating_sub(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_long(&self) -> bool {
        matches!(self, Loca::Long(_))
    }

    /// The byte offset into `glyf` stored at entry `idx`.
    pub fn get_raw(&self, idx: usize) -> Result<u32, ReadError> {
        let offset = match self {
            Loca::Short(data) => data.get(idx).map(|x| x.get() as u32 * 2),
            Loca::Long(data) => data.get(idx).map(|x| x.get()),
        };
        offset.ok_or(ReadError::EndOfFile)
    }

    /// The byte range of a glyph's record in `glyf`.
    ///
    /// The range is empty for glyphs without an outline.
    pub fn glyph_range(&self, gid: GlyphId) -> Result<std::ops::Range<u32>, ReadError> {
        let idx = gid.to_u32() as usize;
        let start = self.get_raw(idx)?;
        let end = self.get_raw(idx + 1)?;
        if end < start {
            return Err(ReadError::MalformedData("loca offsets are not increasing"));
        }
        Ok(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttf_test_data::tables;

    #[test]
    fn short_and_long_agree() {
        let offsets = [0u32, 24, 24, 100, 65534 * 2];
        let short = tables::loca_short(&offsets);
        let long = tables::loca_long(&offsets);
        let short = Loca::read(FontData::new(&short), false).unwrap();
        let long = Loca::read(FontData::new(&long), true).unwrap();
        assert_eq!(short.len(), 4);
        assert_eq!(long.len(), 4);
        assert!(long.is_long() && !short.is_long());
        for idx in 0..offsets.len() {
            assert_eq!(short.get_raw(idx), long.get_raw(idx));
            assert_eq!(short.get_raw(idx), Ok(offsets[idx]));
        }
        assert_eq!(short.get_raw(5), Err(ReadError::EndOfFile));
    }

    #[test]
    fn glyph_ranges() {
        let buf = tables::loca_long(&[0, 10, 10, 4]);
        let loca = Loca::read(FontData::new(&buf), true).unwrap();
        assert_eq!(loca.glyph_range(GlyphId::new(0)), Ok(0..10));
        assert!(loca.glyph_range(GlyphId::new(1)).unwrap().is_empty());
        assert!(matches!(
            loca.glyph_range(GlyphId::new(2)),
            Err(ReadError::MalformedData(_))
        ));
        assert_eq!(loca.glyph_range(GlyphId::new(3)), Err(ReadError::EndOfFile));
    }

    #[test]
    fn odd_length_short_table() {
        let bytes = [0u8, 0, 0, 5, 0xFF];
        let loca = Loca::read(FontData::new(&bytes), false).unwrap();
        assert_eq!(loca.len(), 1);
        assert_eq!(loca.get_raw(1), Ok(10));
    }
}
