use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use read_mfnt::Bitmap;

/// A glyph-like bitmap: a few vertical stems and horizontal bars.
fn glyph_like(width: usize, height: usize, rng: &mut StdRng) -> Bitmap {
    let mut bitmap = Bitmap::new(width, height);
    for _ in 0..3 {
        let x = rng.gen_range(0..width);
        for y in 0..height {
            bitmap.set(x, y, true);
        }
        let y = rng.gen_range(0..height);
        for x in 0..width {
            bitmap.set(x, y, true);
        }
    }
    bitmap
}

pub fn compress_glyphs(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("compress");
    for size in [8, 16, 32, 64] {
        let bitmap = glyph_like(size - 1, size, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &bitmap, |b, bitmap| {
            b.iter(|| write_mfnt::compress(bitmap))
        });
    }
    group.finish();
}

criterion_group!(benches, compress_glyphs);
criterion_main!(benches);
