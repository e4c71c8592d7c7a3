use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mc_core::Image;
use mc_trace::trace;

fn synthetic_blob(width: usize, height: usize) -> Image<bool> {
    let (cx, cy) = (width as f32 * 0.5, height as f32 * 0.5);
    let r = width.min(height) as f32 * 0.4;

    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let angle = dy.atan2(dx);
            let wobble = 1.0 + 0.15 * (7.0 * angle).sin();
            data.push((dx * dx + dy * dy).sqrt() < r * wobble);
        }
    }

    Image::from_vec(width, height, data).expect("sized buffer")
}

fn synthetic_comb(teeth: usize, tooth_len: usize) -> Image<bool> {
    let width = 2 * teeth + 3;
    let height = tooth_len + 3;
    let base = height - 2;

    let mut img = Image::new_fill(width, height, false);
    for x in 1..width - 1 {
        *img.get_mut(x, base).expect("inside") = true;
    }
    for t in 0..teeth {
        for y in 1..base {
            *img.get_mut(2 + 2 * t, y).expect("inside") = true;
        }
    }
    img
}

fn bench_trace(c: &mut Criterion) {
    let blob = synthetic_blob(1024, 768);
    c.bench_function("mc_trace_blob_1024x768", |b| {
        b.iter(|| {
            let outline = trace(black_box(&blob)).expect("trace");
            black_box(outline.len());
        });
    });

    let comb = synthetic_comb(256, 64);
    c.bench_function("mc_trace_comb_256_teeth", |b| {
        b.iter(|| {
            let outline = trace(black_box(&comb)).expect("trace");
            black_box(outline.len());
        });
    });
}

criterion_group!(benches, bench_trace);
criterion_main!(benches);
