//! The [head](https://docs.microsoft.com/en-us/typography/opentype/spec/head) table

use log::debug;
use types::{BoundingBox, LongDateTime, Tag};

use crate::{table_provider::TopLevelTable, FontData, ReadError};

/// The `head` table.
///
/// All fields are decoded eagerly; the table is small and is needed before
/// any glyph can be located.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Head {
    /// Table version, normally 1.0.
    pub version: f64,
    pub font_revision: f64,
    pub checksum_adjustment: u32,
    /// Should equal [`Head::MAGIC`].
    pub magic_number: u32,
    pub flags: u16,
    /// Valid range is 16 to 16384.
    pub units_per_em: u16,
    pub created: LongDateTime,
    pub modified: LongDateTime,
    /// Bounds of all glyphs in the font.
    pub bbox: BoundingBox<i16>,
    pub mac_style: u16,
    /// Smallest readable size in pixels.
    pub lowest_rec_ppem: u16,
    pub font_direction_hint: i16,
    /// 0 for short `loca` offsets, 1 for long.
    pub index_to_loc_format: i16,
    pub glyph_data_format: i16,
}

impl TopLevelTable for Head {
    const TAG: Tag = Tag::new(b"head");
}

impl Head {
    pub const MAGIC: u32 = 0x5F0F3CF5;

    /// Decode the table.
    ///
    /// The magic number is not checked here; see [`Head::validate`].
    pub fn read(data: FontData) -> Result<Self, ReadError> {
        let mut cursor = data.cursor();
        let version = cursor.read_fixed()?;
        let font_revision = cursor.read_fixed()?;
        let checksum_adjustment = cursor.read()?;
        let magic_number = cursor.read()?;
        let flags = cursor.read()?;
        let units_per_em = cursor.read()?;
        let created = cursor.read_timestamp()?;
        let modified = cursor.read_timestamp()?;
        let bbox = BoundingBox {
            x_min: cursor.read()?,
            y_min: cursor.read()?,
            x_max: cursor.read()?,
            y_max: cursor.read()?,
        };
        let head = Head {
            version,
            font_revision,
            checksum_adjustment,
            magic_number,
            flags,
            units_per_em,
            created,
            modified,
            bbox,
            mac_style: cursor.read()?,
            lowest_rec_ppem: cursor.read()?,
            font_direction_hint: cursor.read()?,
            index_to_loc_format: cursor.read()?,
            glyph_data_format: cursor.read()?,
        };
        head.log_fields();
        Ok(head)
    }

    /// Check the magic number.
    pub fn validate(&self) -> Result<(), ReadError> {
        if self.magic_number == Self::MAGIC {
            Ok(())
        } else {
            Err(ReadError::MagicMismatch(self.magic_number))
        }
    }

    /// `true` if `loca` uses 32-bit offsets.
    pub fn is_long_loca(&self) -> bool {
        self.index_to_loc_format == 1
    }

    fn log_fields(&self) {
        debug!(
            "head: version {} revision {} checksum adjustment 0x{:08X} magic 0x{:08X}",
            self.version, self.font_revision, self.checksum_adjustment, self.magic_number
        );
        debug!(
            "head: flags 0x{:04X} units per em {} created {} modified {}",
            self.flags,
            self.units_per_em,
            self.created.as_secs(),
            self.modified.as_secs()
        );
        debug!(
            "head: bbox ({}, {}) ({}, {}) mac style 0x{:04X} lowest ppem {}",
            self.bbox.x_min,
            self.bbox.y_min,
            self.bbox.x_max,
            self.bbox.y_max,
            self.mac_style,
            self.lowest_rec_ppem
        );
        debug!(
            "head: direction hint {} index to loc format {} glyph data format {}",
            self.font_direction_hint, self.index_to_loc_format, self.glyph_data_format
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ttf_test_data::{tables, BeBuffer};

    #[test]
    fn smoke_test() {
        let _ = env_logger::builder().is_test(true).try_init();
        let buf = tables::head(1);
        let head = Head::read(FontData::new(&buf)).unwrap();
        assert_eq!(
            head,
            Head {
                version: 1.0,
                font_revision: 2.5,
                checksum_adjustment: 0xCAFE_F00D,
                magic_number: Head::MAGIC,
                flags: 0x000B,
                units_per_em: 1000,
                created: LongDateTime::new(0xD1F6_A2C0),
                modified: LongDateTime::new((1 << 32) + 0x10),
                bbox: BoundingBox {
                    x_min: -50,
                    y_min: -200,
                    x_max: 900,
                    y_max: 800,
                },
                mac_style: 0,
                lowest_rec_ppem: 8,
                font_direction_hint: 2,
                index_to_loc_format: 1,
                glyph_data_format: 0,
            }
        );
        assert!(head.is_long_loca());
        assert!(head.validate().is_ok());
    }

    #[test]
    fn bad_magic() {
        let buf = tables::head_with_magic(0, 0xDEADBEEF);
        let head = Head::read(FontData::new(&buf)).unwrap();
        assert!(!head.is_long_loca());
        assert_eq!(head.validate(), Err(ReadError::MagicMismatch(0xDEADBEEF)));
    }

    #[test]
    fn truncated() {
        let buf = BeBuffer::new().extend([0x0001_0000u32, 0x0001_0000, 0, Head::MAGIC]);
        assert_eq!(Head::read(FontData::new(&buf)), Err(ReadError::EndOfFile));
    }
}
