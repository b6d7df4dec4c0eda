use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_donut::core::{render_frame, DonutConfig, FrameRenderer};
use tui_donut::term::encode_diff_into;
use tui_donut::types::Angles;

fn bench_render_reused(c: &mut Criterion) {
    let scene = DonutConfig::default().validate().unwrap();
    let mut renderer = FrameRenderer::new(scene);
    let mut angles = Angles::new(1.0, 1.0);

    c.bench_function("render_50x50_reused", |b| {
        b.iter(|| {
            angles.advance(0.08, 0.03);
            black_box(renderer.render(black_box(angles)));
        })
    });
}

fn bench_render_fresh(c: &mut Criterion) {
    let scene = DonutConfig::default().validate().unwrap();

    c.bench_function("render_50x50_fresh", |b| {
        b.iter(|| black_box(render_frame(black_box(Angles::new(1.0, 1.0)), &scene)))
    });
}

fn bench_encode_diff(c: &mut Criterion) {
    let scene = DonutConfig::default().validate().unwrap();
    let prev = render_frame(Angles::new(1.0, 1.0), &scene);
    let next = render_frame(Angles::new(1.08, 1.03), &scene);
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_one_step", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&prev), black_box(&next), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_render_reused,
    bench_render_fresh,
    bench_encode_diff
);
criterion_main!(benches);
