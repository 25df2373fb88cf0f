//! Assembling synthetic sfnt files.

use ttf_types::{Tag, TT_SFNT_VERSION};

use crate::bebuffer::BeBuffer;

/// Builds a font file from a list of tables.
///
/// Records are written in insertion order, which makes it possible to build
/// directories with duplicate or unsorted tags.
#[derive(Debug, Clone)]
pub struct FontBuilder {
    sfnt_version: u32,
    tables: Vec<(Tag, Vec<u8>)>,
}

impl Default for FontBuilder {
    fn default() -> Self {
        Self {
            sfnt_version: TT_SFNT_VERSION,
            tables: Vec::new(),
        }
    }
}

impl FontBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn sfnt_version(mut self, version: u32) -> Self {
        self.sfnt_version = version;
        self
    }

    pub fn add_table(mut self, tag: Tag, data: impl AsRef<[u8]>) -> Self {
        self.tables.push((tag, data.as_ref().to_vec()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let num_tables = self.tables.len() as u16;
        let entry_selector = (num_tables.max(1)).ilog2() as u16;
        let search_range = (1u16 << entry_selector) * 16;
        let range_shift = (num_tables * 16).saturating_sub(search_range);

        let mut header = BeBuffer::new()
            .push(self.sfnt_version)
            .push(num_tables)
            .push(search_range)
            .push(entry_selector)
            .push(range_shift);

        let mut offset = 12 + self.tables.len() * 16;
        let mut body = BeBuffer::new();
        for (tag, data) in &self.tables {
            header = header
                .push(*tag)
                .push(checksum(data))
                .push(offset as u32)
                .push(data.len() as u32);
            body = body.extend_bytes(data).align_to(4);
            offset = 12 + self.tables.len() * 16 + body.len();
        }
        let mut font = header.into_vec();
        font.extend_from_slice(&body);
        font
    }
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4)
        .map(|chunk| {
            let mut word = [0u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_be_bytes(word)
        })
        .fold(0u32, |sum, word| sum.wrapping_add(word))
}
