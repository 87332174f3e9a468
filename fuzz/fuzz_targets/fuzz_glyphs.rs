#![no_main]
//! Splits the input into a font and some text, and maps the text.

use libfuzzer_sys::fuzz_target;
use read_psf::Font;

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let (text, font_data) = rest.split_at((split as usize).min(rest.len()));
    let Ok(font) = Font::new(font_data) else {
        return;
    };

    let mut end = 0;
    for run in font.glyphs(text) {
        // runs are contiguous and never empty
        assert_eq!(run.range.start, end);
        assert!(run.range.end > run.range.start);
        end = run.range.end;
        if let Some(glyph) = run.glyph {
            assert!(font.glyph(glyph).is_some());
        }
    }
    assert_eq!(end, text.len());
    let _ = font.replacement_glyph();
    let _ = font.next_glyph_nul_terminated(text);
});
