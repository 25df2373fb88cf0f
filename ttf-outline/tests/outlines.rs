use pretty_assertions::assert_eq;
use ttf_outline::{
    load_font_file, load_glyph_by_index, load_raw_glyph_by_index,
    raw::{
        types::{BoundingBox, Point},
        GlyphKind,
    },
    resolve_codepoint, resolve_codepoint_to_glyph_index, FontFile, GlyphId, OutlineError,
    ReadError,
};
use ttf_test_data::{simple_font, simple_glyphs};

fn font() -> FontFile {
    let _ = env_logger::builder().is_test(true).try_init();
    FontFile::from_bytes(simple_font(false)).unwrap()
}

fn points(coords: &[(f32, f32)]) -> Vec<Point<f32>> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn load_from_disk() {
    let path = std::env::temp_dir().join(format!("ttf-outline-{}.ttf", std::process::id()));
    std::fs::write(&path, simple_font(true)).unwrap();
    let loaded = load_font_file(&path);
    std::fs::remove_file(&path).unwrap();
    let font = loaded.unwrap();
    assert_eq!(font.data(), simple_font(true).as_slice());
    assert!(font.head().is_long_loca());
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("ttf-outline-this-file-does-not-exist.ttf");
    let err = load_font_file(path).unwrap_err();
    assert!(matches!(err, OutlineError::Io(_)));
    assert!(err.to_string().starts_with("failed to read font file"));
}

#[test]
fn raw_outline() {
    let font = font();
    let glyph = resolve_codepoint(&font, '@' as u32, false).unwrap();
    assert_eq!(glyph.glyph_id, GlyphId::new(simple_glyphs::BOX));
    assert_eq!(
        glyph.points,
        points(&[(0.0, 0.0), (0.0, 700.0), (500.0, 700.0), (500.0, 0.0)])
    );
    assert_eq!(glyph.on_curve, [true; 4]);
    assert_eq!(glyph.contour_ends, [3]);
    assert_eq!(
        glyph.bbox,
        BoundingBox {
            x_min: 0,
            y_min: 0,
            x_max: 500,
            y_max: 700
        }
    );
}

#[test]
fn interpolated_box() {
    let font = font();
    let glyph = load_glyph_by_index(&font, simple_glyphs::BOX.into(), true).unwrap();
    assert_eq!(
        glyph.points,
        points(&[
            (0.0, 0.0),
            (0.0, 350.0),
            (0.0, 700.0),
            (250.0, 700.0),
            (500.0, 700.0),
            (500.0, 350.0),
            (500.0, 0.0),
            (250.0, 0.0),
        ])
    );
    assert_eq!(
        glyph.on_curve,
        [true, false, true, false, true, false, true, false]
    );
    assert_eq!(glyph.contour_ends, [7]);
}

#[test]
fn interpolated_quad() {
    let font = font();
    let glyph = resolve_codepoint(&font, 'B' as u32, true).unwrap();
    assert_eq!(glyph.glyph_id, GlyphId::new(simple_glyphs::QUAD));
    assert_eq!(
        glyph.points,
        points(&[
            (100.0, 0.0),
            (100.0, 300.0),
            (250.0, 300.0),
            (400.0, 300.0),
            (400.0, 0.0),
            (250.0, 0.0),
        ])
    );
    assert_eq!(glyph.on_curve, [true, false, true, false, true, false]);
}

#[test]
fn two_contours() {
    let font = font();
    let glyph = resolve_codepoint(&font, 'D' as u32, false).unwrap();
    assert_eq!(glyph.contour_count(), 2);
    assert_eq!(glyph.contours().collect::<Vec<_>>(), [0..3, 3..6]);
    let normalized = glyph.normalized();
    // triangle: three lines; second contour: one line on the closing edge
    assert_eq!(normalized.contour_ends, [5, 9]);
}

#[test]
fn word_sized_deltas() {
    let font = font();
    let glyph = resolve_codepoint(&font, 'E' as u32, false).unwrap();
    assert_eq!(glyph.points, points(&[(-300.0, 1000.0), (700.0, -1000.0)]));
}

#[test]
fn unmapped_codepoints_load_notdef() {
    let font = font();
    for codepoint in ['b' as u32, 0xFFFF, 0x10FFFF] {
        assert_eq!(
            resolve_codepoint_to_glyph_index(&font, codepoint),
            Ok(GlyphId::NOTDEF)
        );
        let glyph = resolve_codepoint(&font, codepoint, false).unwrap();
        assert_eq!(glyph.glyph_id, GlyphId::NOTDEF);
    }
}

#[test]
fn segment_delta_applies_outside_start_code() {
    let font = font();
    // '?' precedes the '@' segment, whose delta is -0x40
    assert_eq!(
        resolve_codepoint_to_glyph_index(&font, '?' as u32),
        Ok(GlyphId::new(0xFFFF))
    );
    // 'z' falls into the terminator segment, whose delta is 1
    assert_eq!(
        resolve_codepoint_to_glyph_index(&font, 'z' as u32),
        Ok(GlyphId::new(0x7B))
    );
    assert_eq!(
        resolve_codepoint(&font, 'z' as u32, false),
        Err(ReadError::EndOfFile)
    );
}

#[test]
fn no_partial_glyphs() {
    let font = font();
    assert_eq!(
        resolve_codepoint(&font, 'A' as u32, true),
        Err(ReadError::EmptyGlyph)
    );
    assert_eq!(
        resolve_codepoint(&font, 'C' as u32, true),
        Err(ReadError::UnsupportedGlyph(GlyphKind::Composite))
    );
}

#[test]
fn raw_glyph_keeps_integer_points() {
    let font = font();
    let glyph = load_raw_glyph_by_index(&font, simple_glyphs::WIDE.into()).unwrap();
    assert_eq!(glyph.points, [Point::new(-300, 1000), Point::new(700, -1000)]);
    assert_eq!(glyph.on_curve, [true, false]);
    assert_eq!(
        load_glyph_by_index(&font, simple_glyphs::WIDE.into(), false).unwrap(),
        glyph.to_f32()
    );
}

#[test]
fn glyph_index_out_of_range() {
    let font = font();
    for index in [simple_glyphs::NUM_GLYPHS as u32, 0x1_0000, u32::MAX] {
        assert_eq!(
            load_glyph_by_index(&font, index, false),
            Err(ReadError::EndOfFile)
        );
        assert_eq!(
            load_raw_glyph_by_index(&font, index),
            Err(ReadError::EndOfFile)
        );
    }
}

#[test]
fn short_and_long_loca_agree() {
    let short = FontFile::from_bytes(simple_font(false)).unwrap();
    let long = FontFile::from_bytes(simple_font(true)).unwrap();
    for index in 0..simple_glyphs::NUM_GLYPHS as u32 {
        assert_eq!(
            load_glyph_by_index(&short, index, false),
            load_glyph_by_index(&long, index, false)
        );
    }
}

#[test]
fn charmap_mappings() {
    let font = font();
    let mapped = font
        .charmap()
        .unwrap()
        .iter()
        .map(|(codepoint, _)| codepoint)
        .collect::<Vec<_>>();
    assert_eq!(mapped, "ABCDEac".chars().map(u32::from).collect::<Vec<_>>());
}

#[test]
fn read_errors_convert() {
    let err: OutlineError = ReadError::NoUnicodeCmap.into();
    assert!(matches!(err, OutlineError::Read(ReadError::NoUnicodeCmap)));
    assert_eq!(err.to_string(), "no Unicode cmap subtable");
}
