use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use stegano_lab::media::image::{hide_image_at, hide_text};

fn prepare_carrier() -> RgbImage {
    RgbImage::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]))
}

pub fn image_hiding(c: &mut Criterion) {
    let carrier = prepare_carrier();
    let secret = RgbImage::from_fn(256, 256, |x, y| Rgb([y as u8, x as u8, 128]));

    c.bench_function("Text Hiding", |b| {
        b.iter(|| hide_text(&carrier, "Hello World").expect("Cannot hide text"))
    });

    c.bench_function("Image Hiding", |b| {
        b.iter(|| hide_image_at(&carrier, &secret, 128, 128).expect("Cannot hide image"))
    });
}

criterion_group!(benches, image_hiding);
criterion_main!(benches);
