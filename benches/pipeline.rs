use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flatshade::prelude::*;
use flatshade::sorting::sort_back_to_front;

/// A grid of unit cubes, `n` by `n`, centred in front of the camera.
fn cube_grid(n: u32) -> Mesh {
    let cube = Mesh::unit_cube();
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for row in 0..n {
        for col in 0..n {
            let offset = Vec4::new(
                col as f32 * 1.5 - n as f32 * 0.75,
                row as f32 * 1.5 - n as f32 * 0.75,
                0.0,
            );
            let base = vertices.len() as u32;
            vertices.extend(cube.vertices().iter().map(|&v| v + offset));
            faces.extend(
                cube.faces()
                    .iter()
                    .map(|f| Face::new(f.a + base, f.b + base, f.c + base)),
            );
        }
    }

    Mesh::new(vertices, faces).expect("grid indices are in range")
}

fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let pipeline = RenderConfig::default().pipeline().expect("default config is valid");

    for n in [1u32, 8, 32] {
        let mesh = cube_grid(n);
        let mut model = Transform::new();
        model
            .rotate_y(0.4)
            .rotate_x(0.2)
            .set_position_xyz(0.0, 0.0, n as f32 * 2.0);
        let input = FrameInput::new(Camera::default(), model);

        group.bench_with_input(BenchmarkId::new("cubes", n * n), &mesh, |b, mesh| {
            b.iter(|| pipeline.render(black_box(mesh), black_box(&input)));
        });
    }

    group.finish();
}

fn benchmark_sort(c: &mut Criterion) {
    let pipeline = RenderConfig::default().pipeline().expect("default config is valid");
    let mut model = Transform::new();
    model.rotate_y(0.4).rotate_x(0.2).set_position_xyz(0.0, 0.0, 64.0);
    let triangles = pipeline
        .render(&cube_grid(32), &FrameInput::new(Camera::default(), model))
        .into_triangles();

    c.bench_function("sort_back_to_front", |b| {
        b.iter(|| {
            let mut batch = triangles.clone();
            sort_back_to_front(black_box(&mut batch));
        });
    });
}

criterion_group!(benches, benchmark_frame, benchmark_sort);
criterion_main!(benches);
