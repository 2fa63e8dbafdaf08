use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use stegano_lab::media::image::{find_differences, hide_text, reveal, reveal_text};

pub fn image_unveiling(c: &mut Criterion) {
    let carrier = RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
    let image_with_secret = hide_text(&carrier, "Hello World").expect("Cannot hide text");

    c.bench_function("Text Unveiling", |b| {
        b.iter(|| reveal_text(&image_with_secret).expect("Cannot unveil text"))
    });

    c.bench_function("Low Bit Plane Unveiling", |b| {
        b.iter(|| reveal(&image_with_secret))
    });

    c.bench_function("Image Diffing", |b| {
        b.iter(|| find_differences(&carrier, &image_with_secret))
    });
}

criterion_group!(benches, image_unveiling);
criterion_main!(benches);
