//! a trait for things that can serve font tables

use types::Tag;

use crate::{
    tables::{cmap::Cmap, glyf::Glyf, head::Head, loca::Loca},
    FontData, ReadError, TableDirectory,
};

/// A table that has an associated tag.
///
/// This is true of top-level tables, but not their various subtables.
pub trait TopLevelTable {
    /// The table's tag.
    const TAG: Tag;
}

/// An interface for accessing tables from a font (or font-like object)
pub trait TableProvider<'a> {
    fn data_for_tag(&self, tag: Tag) -> Result<FontData<'a>, ReadError>;

    /// The `head` table, without checking its magic number.
    fn head(&self) -> Result<Head, ReadError> {
        self.data_for_tag(Head::TAG).and_then(Head::read)
    }

    /// The `loca` table.
    ///
    /// If `is_long` is `None`, the format is read from `head`.
    fn loca(&self, is_long: impl Into<Option<bool>>) -> Result<Loca<'a>, ReadError> {
        let is_long = match is_long.into() {
            Some(val) => val,
            None => self.head()?.is_long_loca(),
        };
        self.data_for_tag(Loca::TAG)
            .and_then(|data| Loca::read(data, is_long))
    }

    fn glyf(&self) -> Result<Glyf<'a>, ReadError> {
        self.data_for_tag(Glyf::TAG).and_then(Glyf::read)
    }

    fn cmap(&self) -> Result<Cmap<'a>, ReadError> {
        self.data_for_tag(Cmap::TAG).and_then(Cmap::read)
    }
}

impl<'a> TableProvider<'a> for TableDirectory<'a> {
    fn data_for_tag(&self, tag: Tag) -> Result<FontData<'a>, ReadError> {
        self.table_data(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttf_test_data::{simple_font, simple_glyphs};

    #[test]
    fn loca_format_from_head() {
        for long in [false, true] {
            let font = simple_font(long);
            let directory = TableDirectory::new(FontData::new(&font)).unwrap();
            let loca = directory.loca(None).unwrap();
            assert_eq!(loca.is_long(), long);
            assert_eq!(loca.len(), simple_glyphs::NUM_GLYPHS);
        }
    }

    #[test]
    fn missing_table() {
        struct NoTables;
        impl TableProvider<'static> for NoTables {
            fn data_for_tag(&self, tag: Tag) -> Result<FontData<'static>, ReadError> {
                Err(ReadError::TableNotFound(tag))
            }
        }
        assert_eq!(
            NoTables.glyf().map(|_| ()),
            Err(ReadError::TableNotFound(Tag::new(b"glyf")))
        );
        // explicit format skips the head lookup
        assert_eq!(
            NoTables.loca(true).map(|_| ()),
            Err(ReadError::TableNotFound(Tag::new(b"loca")))
        );
        assert_eq!(
            NoTables.loca(None).map(|_| ()),
            Err(ReadError::TableNotFound(Tag::new(b"head")))
        );
    }

    #[test]
    fn simple_font_glyphs() {
        let font = simple_font(false);
        let directory = TableDirectory::new(FontData::new(&font)).unwrap();
        let loca = directory.loca(None).unwrap();
        let glyf = directory.glyf().unwrap();
        let quad = loca
            .glyph_range(simple_glyphs::QUAD.into())
            .unwrap();
        let glyph = glyf.simple_glyph(quad.start).unwrap();
        assert_eq!(glyph.num_points(), 4);
        assert_eq!(
            glyph.on_curve().collect::<Vec<_>>(),
            [true, false, false, true]
        );
        let cmap = directory.cmap().unwrap();
        assert_eq!(cmap.map_codepoint('B').map(|gid| gid.to_u16()), Ok(simple_glyphs::QUAD));
    }
}
