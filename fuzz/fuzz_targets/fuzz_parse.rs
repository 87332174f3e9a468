#![no_main]
use libfuzzer_sys::fuzz_target;
use read_psf::{types::GlyphId, Font};

fn do_parse_things(data: &[u8]) -> Result<(), read_psf::ReadError> {
    let (font, _) = Font::parse(data)?;

    assert_eq!(
        font.glyph_data().len(),
        font.num_glyphs() as usize * font.charsize()
    );
    for gid in 0..font.num_glyphs() {
        let glyph = font.glyph(GlyphId::new(gid)).unwrap();
        assert_eq!(glyph.rows().len(), font.height() as usize);
    }
    if let Some(map) = font.unimap() {
        for (key, glyph) in map.iter() {
            assert!(glyph.to_u32() < font.num_glyphs());
            assert_eq!(map.get(&key), Some(glyph));
        }
    }

    Ok(())
}

fuzz_target!(|data: &[u8]| {
    let _ = do_parse_things(data);
});
