//! Decoded glyph outlines.

use core::ops::Range;

use ttf_read::{
    tables::glyf::SimpleGlyph,
    types::{BoundingBox, GlyphId, Point},
};

/// The outline of a simple glyph.
///
/// Points are stored per glyph with a parallel on-curve flag for each one.
/// Contour `i` ends at `contour_ends[i]` (inclusive) and starts right after
/// the previous contour, or at 0.
///
/// Coordinates are integers as decoded from the font and `f32` once
/// converted or normalized.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph<C = i32> {
    pub glyph_id: GlyphId,
    /// Bounding box as stored in the glyph header.
    pub bbox: BoundingBox<i16>,
    pub contour_ends: Vec<u32>,
    pub points: Vec<Point<C>>,
    pub on_curve: Vec<bool>,
}

impl<C> Glyph<C> {
    pub fn contour_count(&self) -> usize {
        self.contour_ends.len()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns an iterator over the range of point indices of each contour.
    pub fn contours(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        let n_points = self.points.len();
        let mut start = 0;
        self.contour_ends.iter().map(move |&end| {
            let end = (end as usize + 1).min(n_points).max(start);
            let range = start..end;
            start = end;
            range
        })
    }
}

impl Glyph<i32> {
    pub(crate) fn from_simple(glyph_id: GlyphId, simple: &SimpleGlyph) -> Self {
        Glyph {
            glyph_id,
            bbox: simple.bbox,
            contour_ends: simple
                .end_pts_of_contours
                .iter()
                .map(|end| end.get() as u32)
                .collect(),
            points: simple.points.clone(),
            on_curve: simple.on_curve().collect(),
        }
    }

    /// Convert the coordinates to floats.
    ///
    /// Exact for coordinates up to 2^24 in magnitude. Deltas accumulate in
    /// `i32`, so a record can go past that; such values are rounded.
    pub fn to_f32(&self) -> Glyph<f32> {
        Glyph {
            glyph_id: self.glyph_id,
            bbox: self.bbox,
            contour_ends: self.contour_ends.clone(),
            points: self
                .points
                .iter()
                .map(|point| point.map(|v| v as f32))
                .collect(),
            on_curve: self.on_curve.clone(),
        }
    }
}

impl Glyph<f32> {
    /// Returns a copy with explicit midpoints between every pair of
    /// consecutive on-curve or off-curve points.
    ///
    /// See [`normalize`](crate::normalize::normalize).
    pub fn normalized(&self) -> Glyph<f32> {
        crate::normalize::normalize(self)
    }
}
