//! test data shared between the ttf crates.

pub mod bebuffer;
pub mod builder;
pub mod tables;

pub use bebuffer::BeBuffer;
pub use builder::FontBuilder;

use tables::{off, on, Cmap4Segment};
use ttf_types::Tag;

/// A single contour of five on-curve points whose flags use the repeat
/// bit, preceded by two bytes of instructions.
#[rustfmt::skip]
pub static REPEAT_FLAGS_GLYPH: &[u8] = &[
    0x00, 0x01,             // numberOfContours
    0x00, 0x0A, 0x00, 0x01, // xMin, yMin
    0x00, 0x32, 0x00, 0x0F, // xMax, yMax
    0x00, 0x04,             // endPtsOfContours[0]
    0x00, 0x02,             // instructionLength
    0xB0, 0x00,             // instructions
    0x37,                   // flags[0]
    0x3F, 0x03,             // flags[1], repeated 3 more times
    0x0A, 0x0A, 0x0A, 0x0A, 0x0A, // x deltas
    0x01, 0x02, 0x03, 0x04, 0x05, // y deltas
];

/// Three on-curve points with x deltas of +5, -2 and 0.
#[rustfmt::skip]
pub static X_DELTAS_GLYPH: &[u8] = &[
    0x00, 0x01,             // numberOfContours
    0x00, 0x03, 0x00, 0x00, // xMin, yMin
    0x00, 0x05, 0x00, 0x00, // xMax, yMax
    0x00, 0x02,             // endPtsOfContours[0]
    0x00, 0x00,             // instructionLength
    0x33,                   // on, x positive byte, y same
    0x23,                   // on, x negative byte, y same
    0x31,                   // on, x same, y same
    0x05, 0x02,             // x deltas
];

/// Glyph ids in the font returned by [`simple_font`].
pub mod simple_glyphs {
    pub const BOX: u16 = 0;
    pub const EMPTY: u16 = 1;
    pub const QUAD: u16 = 2;
    pub const COMPOSITE: u16 = 3;
    pub const TWO_CONTOURS: u16 = 4;
    pub const WIDE: u16 = 5;
    pub const NUM_GLYPHS: usize = 6;
}

/// The glyph records of [`simple_font`], in glyph id order.
pub fn simple_glyph_records() -> Vec<BeBuffer> {
    vec![
        tables::simple_glyph(&[3], &[on(0, 0), on(0, 700), on(500, 700), on(500, 0)]),
        BeBuffer::new(),
        tables::simple_glyph(
            &[3],
            &[on(100, 0), off(100, 300), off(400, 300), on(400, 0)],
        ),
        tables::composite_glyph(simple_glyphs::BOX),
        tables::simple_glyph(
            &[2, 5],
            &[
                on(0, 0),
                on(250, 500),
                on(500, 0),
                on(100, 100),
                off(250, 400),
                on(400, 100),
            ],
        ),
        tables::simple_glyph(&[1], &[on(-300, 1000), off(700, -1000)]),
    ]
}

/// The format 4 subtable used by [`simple_font`].
///
/// - `@..=E` map to glyphs 0 to 5 through `idDelta`
/// - `a`, `b` and `c` map to 2, 0 and 4 through the glyph id array
pub fn simple_cmap4() -> BeBuffer {
    tables::cmap4_subtable(
        &[
            Cmap4Segment::new(0x40, 0x45, -0x40, 0),
            // (segCount - index) * 2 bytes to the start of glyphIdArray
            Cmap4Segment::new(0x61, 0x63, 0, 4),
            Cmap4Segment::terminator(),
        ],
        &[2, 0, 4],
    )
}

/// A small TrueType font with `head`, `loca`, `glyf` and `cmap` tables.
///
/// See [`simple_glyphs`] for its contents.
pub fn simple_font(long_loca: bool) -> Vec<u8> {
    let (glyf, offsets) = tables::glyf(&simple_glyph_records());
    let (loca, format) = if long_loca {
        (tables::loca_long(&offsets), 1)
    } else {
        (tables::loca_short(&offsets), 0)
    };
    let cmap = tables::cmap(&[(3, 1), (0, 3)], &simple_cmap4());
    FontBuilder::new()
        .add_table(Tag::new(b"cmap"), cmap)
        .add_table(Tag::new(b"glyf"), glyf)
        .add_table(Tag::new(b"head"), tables::head(format))
        .add_table(Tag::new(b"loca"), loca)
        .build()
}
