use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tincture_color::contrast::evaluate;
use tincture_color::palette::{PaletteOptions, extract_palette};
use tincture_core::{Bitmap, Color};

fn make_noise(w: u32, h: u32) -> Bitmap {
    let mut bm = Bitmap::new(w, h).unwrap();
    let mut state = 0x2545_f491_u32;
    for y in 0..h {
        for x in 0..w {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, _] = state.to_le_bytes();
            bm.set_pixel(x, y, [r, g, b, 255]).unwrap();
        }
    }
    bm
}

fn bench_palette(c: &mut Criterion) {
    let bm = make_noise(512, 512);
    let options = PaletteOptions::default();
    c.bench_function("extract_palette_512", |b| {
        b.iter(|| extract_palette(black_box(&bm), &options))
    });
}

fn bench_contrast(c: &mut Criterion) {
    let fg = Color::from_hex("#767676").unwrap();
    c.bench_function("evaluate_contrast", |b| {
        b.iter(|| evaluate(black_box(&fg), black_box(&Color::WHITE)))
    });
}

criterion_group!(benches, bench_palette, bench_contrast);
criterion_main!(benches);
