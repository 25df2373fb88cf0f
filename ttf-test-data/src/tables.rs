//! Builders for the individual tables read by the outline loader.

use ttf_types::BoundingBox;

use crate::bebuffer::BeBuffer;

pub const HEAD_MAGIC: u32 = 0x5F0F3CF5;

/// A `head` table with the standard magic number.
pub fn head(index_to_loc_format: i16) -> BeBuffer {
    head_with_magic(index_to_loc_format, HEAD_MAGIC)
}

pub fn head_with_magic(index_to_loc_format: i16, magic: u32) -> BeBuffer {
    BeBuffer::new()
        .push(0x0001_0000u32) // version 1.0
        .push(0x0002_8000u32) // fontRevision 2.5
        .push(0xCAFE_F00Du32) // checksumAdjustment
        .push(magic)
        .push(0x000Bu16) // flags
        .push(1000u16) // unitsPerEm
        .extend([0u32, 0xD1F6_A2C0]) // created
        .extend([1u32, 0x0000_0010]) // modified
        .extend([-50i16, -200, 900, 800]) // bbox
        .push(0u16) // macStyle
        .push(8u16) // lowestRecPPEM
        .push(2i16) // fontDirectionHint
        .push(index_to_loc_format)
        .push(0i16) // glyphDataFormat
}

/// One point of a simple glyph, in absolute font units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestPoint {
    pub x: i16,
    pub y: i16,
    pub on_curve: bool,
}

pub const fn on(x: i16, y: i16) -> TestPoint {
    TestPoint {
        x,
        y,
        on_curve: true,
    }
}

pub const fn off(x: i16, y: i16) -> TestPoint {
    TestPoint {
        x,
        y,
        on_curve: false,
    }
}

const ON_CURVE_POINT: u8 = 0x01;
const X_SHORT_VECTOR: u8 = 0x02;
const Y_SHORT_VECTOR: u8 = 0x04;
const X_IS_SAME_OR_POSITIVE: u8 = 0x10;
const Y_IS_SAME_OR_POSITIVE: u8 = 0x20;

/// Encode a simple glyph.
///
/// Every point gets its own flag byte; each coordinate delta picks the
/// smallest encoding (repeat, byte or word), so all three paths of the
/// decoder get exercised.
pub fn simple_glyph(contour_ends: &[u16], points: &[TestPoint]) -> BeBuffer {
    let bbox = points.iter().fold(None, |bbox: Option<BoundingBox<i16>>, p| {
        Some(match bbox {
            None => BoundingBox {
                x_min: p.x,
                y_min: p.y,
                x_max: p.x,
                y_max: p.y,
            },
            Some(b) => BoundingBox {
                x_min: b.x_min.min(p.x),
                y_min: b.y_min.min(p.y),
                x_max: b.x_max.max(p.x),
                y_max: b.y_max.max(p.y),
            },
        })
    });
    let bbox = bbox.unwrap_or_default();

    let mut flags = Vec::new();
    let mut x_data = BeBuffer::new();
    let mut y_data = BeBuffer::new();
    let (mut last_x, mut last_y) = (0i16, 0i16);
    for point in points {
        let mut flag = if point.on_curve { ON_CURVE_POINT } else { 0 };
        let (x_flags, x_bytes) = encode_delta(point.x - last_x, X_SHORT_VECTOR, X_IS_SAME_OR_POSITIVE);
        let (y_flags, y_bytes) = encode_delta(point.y - last_y, Y_SHORT_VECTOR, Y_IS_SAME_OR_POSITIVE);
        flag |= x_flags | y_flags;
        flags.push(flag);
        x_data = x_data.extend_bytes(&x_bytes);
        y_data = y_data.extend_bytes(&y_bytes);
        last_x = point.x;
        last_y = point.y;
    }

    BeBuffer::new()
        .push(contour_ends.len() as i16)
        .extend([bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max])
        .extend(contour_ends.iter().copied())
        .push(0u16) // instructionLength
        .extend_bytes(&flags)
        .extend_bytes(&x_data)
        .extend_bytes(&y_data)
}

fn encode_delta(delta: i16, short_flag: u8, same_or_positive: u8) -> (u8, Vec<u8>) {
    match delta {
        0 => (same_or_positive, Vec::new()),
        1..=255 => (short_flag | same_or_positive, vec![delta as u8]),
        -255..=-1 => (short_flag, vec![delta.unsigned_abs() as u8]),
        _ => (0, delta.to_be_bytes().to_vec()),
    }
}

/// A composite glyph header followed by a single component record.
pub fn composite_glyph(component: u16) -> BeBuffer {
    BeBuffer::new()
        .push(-1i16)
        .extend([0i16, 0, 100, 100])
        .push(0x0002u16) // ARGS_ARE_XY_VALUES
        .push(component)
        .extend([0u8, 0])
}

/// Concatenate glyph records into a `glyf` table, returning it along with
/// the offsets needed to build `loca`.
///
/// Each glyph is padded to an even length so the offsets can be stored in
/// the short format.
pub fn glyf(glyphs: &[BeBuffer]) -> (BeBuffer, Vec<u32>) {
    let mut table = BeBuffer::new();
    let mut offsets = vec![0u32];
    for glyph in glyphs {
        table = table.extend_bytes(glyph).align_to(2);
        offsets.push(table.len() as u32);
    }
    (table, offsets)
}

/// `loca` in the short format: each offset is stored divided by two.
pub fn loca_short(offsets: &[u32]) -> BeBuffer {
    BeBuffer::new().extend(offsets.iter().map(|off| (off / 2) as u16))
}

pub fn loca_long(offsets: &[u32]) -> BeBuffer {
    BeBuffer::new().extend(offsets.iter().copied())
}

/// A segment of a format 4 `cmap` subtable.
#[derive(Clone, Copy, Debug)]
pub struct Cmap4Segment {
    pub start: u16,
    pub end: u16,
    pub delta: i16,
    pub range_offset: u16,
}

impl Cmap4Segment {
    pub const fn new(start: u16, end: u16, delta: i16, range_offset: u16) -> Self {
        Self {
            start,
            end,
            delta,
            range_offset,
        }
    }

    /// The terminating segment every format 4 subtable ends with.
    pub const fn terminator() -> Self {
        Self::new(0xFFFF, 0xFFFF, 1, 0)
    }
}

pub fn cmap4_subtable(segments: &[Cmap4Segment], glyph_id_array: &[u16]) -> BeBuffer {
    let seg_count = segments.len() as u16;
    let entry_selector = seg_count.max(1).ilog2() as u16;
    let search_range = 2 * (1u16 << entry_selector);
    let length = 16 + 8 * seg_count + 2 * glyph_id_array.len() as u16;
    BeBuffer::new()
        .push(4u16) // format
        .push(length)
        .push(0u16) // language
        .push(seg_count * 2)
        .push(search_range)
        .push(entry_selector)
        .push(seg_count * 2 - search_range)
        .extend(segments.iter().map(|seg| seg.end))
        .push(0u16) // reservedPad
        .extend(segments.iter().map(|seg| seg.start))
        .extend(segments.iter().map(|seg| seg.delta))
        .extend(segments.iter().map(|seg| seg.range_offset))
        .extend(glyph_id_array.iter().copied())
}

/// A `cmap` table where every `(platformID, encodingID)` record points at
/// the same subtable.
pub fn cmap(records: &[(u16, u16)], subtable: &[u8]) -> BeBuffer {
    let subtable_offset = 4 + 8 * records.len() as u32;
    let mut buf = BeBuffer::new().push(0u16).push(records.len() as u16);
    for (platform_id, encoding_id) in records {
        buf = buf
            .push(*platform_id)
            .push(*encoding_id)
            .push(subtable_offset);
    }
    buf.extend_bytes(subtable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_is_54_bytes() {
        assert_eq!(head(0).len(), 54);
    }

    #[test]
    fn delta_encoding() {
        assert_eq!(encode_delta(0, 0x02, 0x10), (0x10, vec![]));
        assert_eq!(encode_delta(5, 0x02, 0x10), (0x12, vec![5]));
        assert_eq!(encode_delta(-2, 0x02, 0x10), (0x02, vec![2]));
        assert_eq!(encode_delta(300, 0x02, 0x10), (0, vec![0x01, 0x2C]));
    }

    #[test]
    fn glyf_offsets_are_even() {
        let odd = BeBuffer::new().extend([1u8, 2, 3]);
        let (table, offsets) = glyf(&[odd, BeBuffer::new()]);
        assert_eq!(offsets, [0, 4, 4]);
        assert_eq!(table.len(), 4);
    }
}
