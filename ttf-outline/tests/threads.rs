//! A loaded font is read-only, so glyphs can be decoded from many threads
//! at once without locking.

use ttf_outline::{load_glyph_by_index, FontFile};
use ttf_test_data::{simple_font, simple_glyphs};

#[test]
fn concurrent_glyph_loads() {
    let font = FontFile::from_bytes(simple_font(false)).unwrap();
    let expected = (0..simple_glyphs::NUM_GLYPHS as u32)
        .map(|index| load_glyph_by_index(&font, index, true))
        .collect::<Vec<_>>();
    std::thread::scope(|scope| {
        let handles = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (0..simple_glyphs::NUM_GLYPHS as u32)
                        .map(|index| load_glyph_by_index(&font, index, true))
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
