use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use psf_test_data::{psf1, psf2};
use read_psf::Font;

const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog. \
    Ça va? e\u{301}te\u{301}, A\u{30A}ngstro\u{308}m \u{263A} \u{1F600}";

fn fonts() -> Vec<(&'static str, Font)> {
    vec![
        ("psf1_table", Font::new(&psf1::with_unicode_table()).unwrap()),
        ("psf2_table", Font::new(&psf2::with_unicode_table()).unwrap()),
        ("psf2_identity", Font::new(&psf2::font(512, 16, 8)).unwrap()),
    ]
}

pub fn parse_benchmark(c: &mut Criterion) {
    let v1 = psf1::with_unicode_table().into_vec();
    let v2 = psf2::with_unicode_table().into_vec();
    c.bench_function("parse_psf1", |b| b.iter(|| Font::parse(black_box(&v1))));
    c.bench_function("parse_psf2", |b| b.iter(|| Font::parse(black_box(&v2))));
}

pub fn glyphs_benchmark(c: &mut Criterion) {
    let text = SAMPLE_TEXT.repeat(16);
    for (name, font) in fonts() {
        c.bench_with_input(BenchmarkId::new("glyphs", name), &font, |b, font| {
            b.iter(|| font.glyphs(black_box(text.as_bytes())).count())
        });
    }
}

pub fn replacement_benchmark(c: &mut Criterion) {
    for (name, font) in fonts() {
        c.bench_with_input(
            BenchmarkId::new("replacement_glyph", name),
            &font,
            |b, font| b.iter(|| black_box(font).replacement_glyph()),
        );
    }
}

criterion_group!(
    benches,
    parse_benchmark,
    glyphs_benchmark,
    replacement_benchmark
);
criterion_main!(benches);
