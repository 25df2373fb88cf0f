//! Quadratic curve normalization.
//!
//! TrueType contours may place two off-curve points next to each other,
//! leaving the on-curve point between them implicit, and may join two
//! on-curve points with a straight line. After normalization every contour
//! strictly alternates between on-curve and off-curve points: the implied
//! on-curve midpoints are made explicit, and each straight line becomes a
//! degenerate quadratic with an off-curve midpoint.

use log::debug;
use ttf_read::types::Point;

use crate::Glyph;

/// Returns a new glyph with a midpoint inserted between every two
/// consecutive points that share the same on-curve state.
///
/// Each contour is closed: its last point is followed by its first. A
/// contour with a single point is copied unchanged.
pub fn normalize(glyph: &Glyph<f32>) -> Glyph<f32> {
    let mut points: Vec<Point<f32>> = Vec::with_capacity(glyph.point_count() * 2);
    let mut on_curve = Vec::with_capacity(glyph.point_count() * 2);
    let mut contour_ends = Vec::with_capacity(glyph.contour_count());
    for range in glyph.contours() {
        let contour = &glyph.points[range.clone()];
        let flags = &glyph.on_curve[range];
        let len = contour.len();
        for i in 0..len {
            points.push(contour[i]);
            on_curve.push(flags[i]);
            if len < 2 {
                continue;
            }
            let next = (i + 1) % len;
            if flags[i] == flags[next] {
                points.push(contour[i].midpoint(contour[next]));
                on_curve.push(!flags[i]);
            }
        }
        contour_ends.push(points.len().saturating_sub(1) as u32);
    }
    debug!(
        "normalized {}: {} points became {}",
        glyph.glyph_id,
        glyph.point_count(),
        points.len()
    );
    Glyph {
        glyph_id: glyph.glyph_id,
        bbox: glyph.bbox,
        contour_ends,
        points,
        on_curve,
    }
}
