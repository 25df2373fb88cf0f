//! The [glyf (Glyph Data)](https://docs.microsoft.com/en-us/typography/opentype/spec/glyf) table

use alloc::vec::Vec;

use log::trace;
use types::{BigEndian, BoundingBox, Point, Scalar, Tag};

use crate::{table_provider::TopLevelTable, Cursor, FontData, GlyphKind, ReadError};

/// Flags describing a single point of a simple glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SimpleGlyphFlags(u8);

impl SimpleGlyphFlags {
    /// The point is on the curve.
    pub const ON_CURVE_POINT: Self = Self(0x01);
    /// The x delta is one unsigned byte; the sign comes from
    /// [`Self::X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR`].
    pub const X_SHORT_VECTOR: Self = Self(0x02);
    pub const Y_SHORT_VECTOR: Self = Self(0x04);
    /// The next byte is the number of additional times this flag repeats.
    pub const REPEAT_FLAG: Self = Self(0x08);
    /// With a short vector: the delta is positive. Otherwise: the x
    /// coordinate is the same as the previous one and no delta is stored.
    pub const X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR: Self = Self(0x10);
    pub const Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR: Self = Self(0x20);
    pub const OVERLAP_SIMPLE: Self = Self(0x40);

    const VALID_BITS: u8 = 0x7F;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Construct flags from a raw value, discarding the reserved bit.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::VALID_BITS)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Scalar for SimpleGlyphFlags {
    type Raw = [u8; 1];

    fn to_raw(self) -> Self::Raw {
        [self.0]
    }

    fn from_raw(raw: Self::Raw) -> Self {
        Self::from_bits_truncate(raw[0])
    }
}

/// The [glyf] table.
///
/// [glyf]: https://docs.microsoft.com/en-us/typography/opentype/spec/glyf
#[derive(Clone, Copy, Debug)]
pub struct Glyf<'a> {
    data: FontData<'a>,
}

impl TopLevelTable for Glyf<'_> {
    const TAG: Tag = Tag::new(b"glyf");
}

impl<'a> Glyf<'a> {
    pub fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        Ok(Glyf { data })
    }

    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    /// Decode the simple glyph whose record starts at `offset`.
    ///
    /// Composite records fail with [`ReadError::UnsupportedGlyph`] and
    /// records without contours with [`ReadError::EmptyGlyph`].
    pub fn simple_glyph(&self, offset: u32) -> Result<SimpleGlyph<'a>, ReadError> {
        let mut cursor = self.data.cursor();
        cursor.advance(offset as usize)?;
        let number_of_contours = cursor.read::<i16>()?;
        if number_of_contours < 0 {
            return Err(ReadError::UnsupportedGlyph(GlyphKind::Composite));
        }
        if number_of_contours == 0 {
            return Err(ReadError::EmptyGlyph);
        }
        let bbox = BoundingBox {
            x_min: cursor.read()?,
            y_min: cursor.read()?,
            x_max: cursor.read()?,
            y_max: cursor.read()?,
        };
        let end_pts_of_contours = cursor.read_array::<u16>(number_of_contours as usize)?;
        let increasing = end_pts_of_contours
            .windows(2)
            .all(|pair| pair[0].get() < pair[1].get());
        if !increasing {
            return Err(ReadError::MalformedData(
                "contour end points are not increasing",
            ));
        }
        let instruction_length = cursor.read::<u16>()? as usize;
        let instructions = self
            .data
            .as_bytes()
            .get(cursor.position()..cursor.position() + instruction_length)
            .ok_or(ReadError::EndOfFile)?;
        cursor.advance(instruction_length)?;

        // the last end point is also the largest
        let num_points = end_pts_of_contours
            .last()
            .map(|end| end.get() as usize + 1)
            .unwrap_or_default();
        let mut flags = alloc::vec![SimpleGlyphFlags::empty(); num_points];
        let mut points = alloc::vec![Point::default(); num_points];
        read_points(&mut cursor, &mut flags, &mut points)?;
        trace!(
            "glyf: {} contours, {} points, {} instruction bytes at offset {}",
            number_of_contours,
            num_points,
            instruction_length,
            offset
        );
        Ok(SimpleGlyph {
            bbox,
            end_pts_of_contours,
            instructions,
            flags,
            points,
        })
    }
}

/// Expand run-length encoded flags, then decode the x deltas followed by
/// the y deltas into absolute coordinates.
fn read_points(
    cursor: &mut Cursor,
    flags: &mut [SimpleGlyphFlags],
    points: &mut [Point<i32>],
) -> Result<(), ReadError> {
    let n_points = flags.len();
    let mut i = 0;
    while i < n_points {
        let flag = cursor.read::<SimpleGlyphFlags>()?;
        if flag.contains(SimpleGlyphFlags::REPEAT_FLAG) {
            let count = (cursor.read::<u8>()? as usize + 1).min(n_points - i);
            for f in &mut flags[i..i + count] {
                *f = flag;
            }
            i += count;
        } else {
            flags[i] = flag;
            i += 1;
        }
    }
    let mut x = 0i32;
    for (flag, point) in flags.iter().zip(points.iter_mut()) {
        x = x.wrapping_add(read_delta(
            cursor,
            *flag,
            SimpleGlyphFlags::X_SHORT_VECTOR,
            SimpleGlyphFlags::X_IS_SAME_OR_POSITIVE_X_SHORT_VECTOR,
        )?);
        point.x = x;
    }
    let mut y = 0i32;
    for (flag, point) in flags.iter().zip(points.iter_mut()) {
        y = y.wrapping_add(read_delta(
            cursor,
            *flag,
            SimpleGlyphFlags::Y_SHORT_VECTOR,
            SimpleGlyphFlags::Y_IS_SAME_OR_POSITIVE_Y_SHORT_VECTOR,
        )?);
        point.y = y;
    }
    Ok(())
}

#[inline(always)]
fn read_delta(
    cursor: &mut Cursor,
    flag: SimpleGlyphFlags,
    short_vector: SimpleGlyphFlags,
    same_or_positive: SimpleGlyphFlags,
) -> Result<i32, ReadError> {
    if flag.contains(short_vector) {
        let delta = cursor.read::<u8>()? as i32;
        Ok(if flag.contains(same_or_positive) {
            delta
        } else {
            -delta
        })
    } else if flag.contains(same_or_positive) {
        Ok(0)
    } else {
        Ok(cursor.read::<i16>()? as i32)
    }
}

/// A decoded simple glyph.
///
/// Coordinates are absolute, in font units.
#[derive(Clone, Debug)]
pub struct SimpleGlyph<'a> {
    pub bbox: BoundingBox<i16>,
    /// Index of the last point of each contour.
    pub end_pts_of_contours: &'a [BigEndian<u16>],
    pub instructions: &'a [u8],
    pub flags: Vec<SimpleGlyphFlags>,
    pub points: Vec<Point<i32>>,
}

impl SimpleGlyph<'_> {
    pub fn num_contours(&self) -> usize {
        self.end_pts_of_contours.len()
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Whether each point is on the curve.
    pub fn on_curve(&self) -> impl Iterator<Item = bool> + '_ {
        self.flags
            .iter()
            .map(|flag| flag.contains(SimpleGlyphFlags::ON_CURVE_POINT))
    }
}
