use criterion::{black_box, criterion_group, criterion_main, Criterion};

use colorkit::{inspect, rgb_to_hsl, hsl_to_rgb, rgb_to_cmyk, PaletteGenerator, Rgb};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn benchmark_conversions(c: &mut Criterion) {
    let rgb = Rgb::new(59, 130, 246);

    c.bench_function("rgb_to_hsl", |b| {
        b.iter(|| rgb_to_hsl(black_box(rgb)))
    });

    let hsl = rgb_to_hsl(rgb);
    c.bench_function("hsl_to_rgb", |b| {
        b.iter(|| hsl_to_rgb(black_box(hsl)))
    });

    c.bench_function("rgb_to_cmyk", |b| {
        b.iter(|| rgb_to_cmyk(black_box(rgb)))
    });

    c.bench_function("inspect", |b| {
        b.iter(|| inspect(black_box("#3B82F6")))
    });
}

fn benchmark_palette_generation(c: &mut Criterion) {
    let generator = PaletteGenerator::new();

    c.bench_function("generate_palette_5", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| generator.generate_with(&mut rng, black_box(5)))
    });

    c.bench_function("generate_palette_12", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| generator.generate_with(&mut rng, black_box(12)))
    });
}

criterion_group!(benches, benchmark_conversions, benchmark_palette_generation);
criterion_main!(benches);
