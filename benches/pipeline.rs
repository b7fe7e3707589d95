use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wireview::models::{CUBE, PENGER};
use wireview::prelude::*;

const VIEWPORT: Viewport = Viewport::new(800, 800);

fn benchmark_project_vertex(c: &mut Criterion) {
    c.bench_function("project_vertex", |b| {
        let v = Vec3::new(0.3, -0.2, 0.4);
        b.iter(|| wireview::pipeline::project_vertex(black_box(v), black_box(0.7), &VIEWPORT));
    });
}

fn benchmark_wireframe_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("wireframe_frame");

    for (name, model) in [("cube", &CUBE), ("penger", &PENGER)] {
        group.bench_function(name, |b| {
            let mut fb = Framebuffer::new(800, 800);
            let mut state = ViewState::new();
            state.angle = 0.9;
            b.iter(|| {
                fb.clear(wireview::colors::BACKGROUND);
                render_model(black_box(model), &state, &VIEWPORT, &mut fb);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_project_vertex, benchmark_wireframe_frame);
criterion_main!(benches);
