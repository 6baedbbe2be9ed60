use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scene_playground::config::ScenePreset;
use scene_playground::render::DrawList;
use scene_playground::scene::{SceneState, Viewport};
use scene_playground::shape::{ShapeFactory, ShapeKind};

/// Benchmark: building each selectable shape
fn bench_shape_generation(c: &mut Criterion) {
    let factory = ShapeFactory::default();
    let mut group = c.benchmark_group("shape_generation");

    for kind in ShapeKind::ALL {
        group.bench_with_input(BenchmarkId::new("build", kind.label()), &kind, |b, kind| {
            b.iter(|| black_box(factory.build(*kind)));
        });
    }

    group.finish();
}

/// Benchmark: wireframe edge extraction on the densest shapes
fn bench_edge_extraction(c: &mut Criterion) {
    let factory = ShapeFactory::default();
    let mut group = c.benchmark_group("edge_extraction");

    for kind in [ShapeKind::Sphere, ShapeKind::Torus, ShapeKind::TorusKnot] {
        let geometry = factory.build(kind);
        group.bench_with_input(BenchmarkId::new("edges", kind.label()), &geometry, |b, geometry| {
            b.iter(|| black_box(geometry.edge_indices()));
        });
    }

    group.finish();
}

/// Benchmark: one shape swap followed by draw-list construction
fn bench_select_and_flatten(c: &mut Criterion) {
    let mut state = SceneState::new(ScenePreset::PLAYGROUND, Viewport::new(1280, 720));
    state.select_light("spot");
    state.set_shadows(true);

    c.bench_function("select_and_flatten", |b| {
        b.iter(|| {
            state.select_shape_key(black_box("7"));
            state.tick();
            black_box(DrawList::build(&state))
        });
    });
}

criterion_group!(
    benches,
    bench_shape_generation,
    bench_edge_extraction,
    bench_select_and_flatten
);
criterion_main!(benches);
