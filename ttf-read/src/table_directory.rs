//! The [sfnt table directory][directory]
//!
//! [directory]: https://learn.microsoft.com/en-us/typography/opentype/spec/otff#table-directory

use log::trace;
use types::{Tag, TRUE_SFNT_VERSION, TT_SFNT_VERSION};

use crate::{Cursor, FontData, ReadError};

/// Size of the offset table at the start of the file.
pub const OFFSET_TABLE_LEN: usize = 12;
/// Size of a single table record.
pub const TABLE_RECORD_LEN: usize = 16;

/// The fixed header at the start of an sfnt file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetTable {
    pub sfnt_version: u32,
    pub num_tables: u16,
    pub search_range: u16,
    pub entry_selector: u16,
    pub range_shift: u16,
}

impl OffsetTable {
    /// Read the five header fields, in order, from the cursor's position.
    pub fn read(cursor: &mut Cursor) -> Result<Self, ReadError> {
        Ok(OffsetTable {
            sfnt_version: cursor.read()?,
            num_tables: cursor.read()?,
            search_range: cursor.read()?,
            entry_selector: cursor.read()?,
            range_shift: cursor.read()?,
        })
    }

    /// `true` if the scalar type identifies TrueType outlines.
    pub fn is_truetype(&self) -> bool {
        matches!(self.sfnt_version, TT_SFNT_VERSION | TRUE_SFNT_VERSION)
    }
}

/// An entry in the table directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRecord {
    pub tag: Tag,
    pub checksum: u32,
    /// Offset of the table from the start of the file.
    pub offset: u32,
    pub length: u32,
}

impl TableRecord {
    pub fn read(cursor: &mut Cursor) -> Result<Self, ReadError> {
        Ok(TableRecord {
            tag: cursor.read()?,
            checksum: cursor.read()?,
            offset: cursor.read()?,
            length: cursor.read()?,
        })
    }
}

/// The table directory of a single font.
#[derive(Clone, Copy, Debug)]
pub struct TableDirectory<'a> {
    data: FontData<'a>,
    offset_table: OffsetTable,
}

impl<'a> TableDirectory<'a> {
    /// Parse the offset table at the start of `data`.
    pub fn new(data: FontData<'a>) -> Result<Self, ReadError> {
        let offset_table = OffsetTable::read(&mut data.cursor())?;
        Ok(Self::from_parts(data, offset_table))
    }

    /// Create a directory from an offset table that was already parsed.
    pub fn from_parts(data: FontData<'a>, offset_table: OffsetTable) -> Self {
        TableDirectory { data, offset_table }
    }

    pub fn offset_table(&self) -> &OffsetTable {
        &self.offset_table
    }

    /// The data for the whole file.
    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    /// Iterate over the table records, in file order.
    ///
    /// A truncated directory yields an error for the first unreadable record
    /// and stops.
    pub fn records(&self) -> impl Iterator<Item = Result<TableRecord, ReadError>> + 'a {
        let mut cursor = self.data.cursor();
        let start = cursor.seek(OFFSET_TABLE_LEN);
        let mut remaining = self.offset_table.num_tables as usize;
        let mut failed = start.is_err();
        let mut pending_error = start.err();
        std::iter::from_fn(move || {
            if let Some(err) = pending_error.take() {
                return Some(Err(err));
            }
            if failed || remaining == 0 {
                return None;
            }
            remaining -= 1;
            let record = TableRecord::read(&mut cursor);
            failed = record.is_err();
            Some(record)
        })
    }

    /// Find the first record with the given tag.
    pub fn find(&self, tag: Tag) -> Result<TableRecord, ReadError> {
        for record in self.records() {
            let record = record?;
            trace!("directory: {} at {}", record.tag, record.offset);
            if record.tag == tag {
                return Ok(record);
            }
        }
        Err(ReadError::TableNotFound(tag))
    }

    /// Find a table, returning its record and a cursor over the whole file
    /// positioned at the start of the table.
    pub fn find_table(&self, tag: Tag) -> Result<(TableRecord, Cursor<'a>), ReadError> {
        let record = self.find(tag)?;
        let mut cursor = self.data.cursor();
        cursor.seek(record.offset as usize)?;
        Ok((record, cursor))
    }

    /// The bytes of a table.
    pub fn table_data(&self, tag: Tag) -> Result<FontData<'a>, ReadError> {
        let record = self.find(tag)?;
        let start = record.offset as usize;
        let end = start.saturating_add(record.length as usize);
        self.data
            .slice(start..end)
            .ok_or(ReadError::InvalidOffset(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ttf_test_data::{BeBuffer, FontBuilder};

    fn three_table_font() -> Vec<u8> {
        FontBuilder::new()
            .add_table(Tag::new(b"cmap"), [1u8; 6])
            .add_table(Tag::new(b"head"), [2u8; 54])
            .add_table(Tag::new(b"glyf"), [3u8; 10])
            .build()
    }

    #[test]
    fn offset_table() {
        let font = three_table_font();
        let directory = TableDirectory::new(FontData::new(&font)).unwrap();
        assert_eq!(
            directory.offset_table(),
            &OffsetTable {
                sfnt_version: 0x00010000,
                num_tables: 3,
                search_range: 32,
                entry_selector: 1,
                range_shift: 16,
            }
        );
        assert!(directory.offset_table().is_truetype());
    }

    #[test]
    fn scalar_types() {
        for (version, truetype) in [(*b"true", true), (*b"OTTO", false), (*b"wOFF", false)] {
            let font = FontBuilder::new()
                .sfnt_version(u32::from_be_bytes(version))
                .add_table(Tag::new(b"head"), [0u8; 4])
                .build();
            let directory = TableDirectory::new(FontData::new(&font)).unwrap();
            assert_eq!(directory.offset_table().is_truetype(), truetype);
        }
    }

    #[test]
    fn find_known_tags() {
        let _ = env_logger::builder().is_test(true).try_init();
        let font = three_table_font();
        let directory = TableDirectory::new(FontData::new(&font)).unwrap();
        // tables start after 12 + 3 * 16 bytes and are padded to 4
        let expected = [(b"cmap", 60, 6), (b"head", 68, 54), (b"glyf", 124, 10)];
        for (tag, offset, length) in expected {
            let record = directory.find(Tag::new(tag)).unwrap();
            assert_eq!((record.offset, record.length), (offset, length));
            let (_, mut cursor) = directory.find_table(Tag::new(tag)).unwrap();
            assert_eq!(cursor.position(), offset as usize);
            assert_eq!(cursor.read::<u8>(), Ok(font[offset as usize]));
            assert_eq!(
                directory.table_data(Tag::new(tag)).unwrap().len(),
                length as usize
            );
        }
    }

    #[test]
    fn missing_tag() {
        let font = three_table_font();
        let directory = TableDirectory::new(FontData::new(&font)).unwrap();
        let loca = Tag::new(b"loca");
        assert_eq!(directory.find(loca), Err(ReadError::TableNotFound(loca)));
        // lookups are exact and case sensitive
        let upper = Tag::new(b"HEAD");
        assert_eq!(directory.find(upper), Err(ReadError::TableNotFound(upper)));
    }

    #[test]
    fn first_match_wins() {
        let font = FontBuilder::new()
            .add_table(Tag::new(b"head"), [1u8; 4])
            .add_table(Tag::new(b"head"), [2u8; 8])
            .build();
        let directory = TableDirectory::new(FontData::new(&font)).unwrap();
        assert_eq!(directory.find(Tag::new(b"head")).unwrap().length, 4);
        assert_eq!(directory.records().count(), 2);
    }

    #[test]
    fn truncated_directory() {
        // claims two tables but holds only one record
        let font = BeBuffer::new()
            .push(0x00010000u32)
            .extend([2u16, 32, 1, 0])
            .push(Tag::new(b"cmap"))
            .extend([0u32, 28, 0]);
        let directory = TableDirectory::new(FontData::new(&font)).unwrap();
        let records = directory.records().collect::<Vec<_>>();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_ok());
        assert_eq!(records[1], Err(ReadError::EndOfFile));
        assert_eq!(
            directory.find(Tag::new(b"glyf")),
            Err(ReadError::EndOfFile)
        );
    }

    #[test]
    fn table_past_end_of_file() {
        let font = BeBuffer::new()
            .push(0x00010000u32)
            .extend([1u16, 16, 0, 0])
            .push(Tag::new(b"head"))
            .extend([0u32, 500, 54]);
        let directory = TableDirectory::new(FontData::new(&font)).unwrap();
        let head = Tag::new(b"head");
        assert_eq!(
            directory.find_table(head).map(|(record, _)| record),
            Err(ReadError::InvalidOffset(500))
        );
        assert!(directory.table_data(head).is_err());
    }

    #[test]
    fn too_short_for_header() {
        let bytes = [0u8, 1, 0];
        assert_eq!(
            TableDirectory::new(FontData::new(&bytes)).map(|_| ()),
            Err(ReadError::EndOfFile)
        );
    }
}
