use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ferrowalk_core::prelude::*;
use geo::Point;

#[allow(clippy::cast_precision_loss)]
fn grid_network(size: usize) -> RoadNetwork {
    let mut vertices = Vec::with_capacity(size * size);
    let mut edges = Vec::with_capacity(2 * size * size);
    for row in 0..size {
        for col in 0..size {
            let id = row * size + col;
            vertices.push(RoadVertex {
                id,
                geometry: Point::new(col as f64 * 0.2, row as f64 * 0.2),
            });
            let speed = 20.0 + ((row + col) % 4) as f64 * 15.0;
            if col + 1 < size {
                edges.push((id, id + 1, RoadEdge::new(0.2, speed)));
            }
            if row + 1 < size {
                edges.push((id, id + size, RoadEdge::new(0.2, speed)));
            }
        }
    }
    RoadNetwork::new(vertices, edges).expect("grid network is valid")
}

#[allow(clippy::cast_precision_loss)]
fn queries(count: usize, extent: f64) -> Vec<Query> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Query::new(
                Point::new(t * extent * 0.3, extent * (1.0 - t) * 0.2),
                Point::new(extent * (0.7 + 0.3 * t), extent * (0.9 - 0.5 * t)),
                500.0,
            )
        })
        .collect()
}

fn bench_single_query(c: &mut Criterion) {
    let network = grid_network(150);
    let query = Query::new(Point::new(0.1, 0.1), Point::new(29.7, 29.5), 500.0);
    let options = SolverOptions::default();

    c.bench_function("shortest_route_150x150", |b| {
        b.iter(|| shortest_route(black_box(&network), black_box(&query), &options));
    });
}

fn bench_batch(c: &mut Criterion) {
    let network = grid_network(150);
    let batch = queries(64, 30.0);
    let options = SolverOptions::default();

    c.bench_function("solve_batch_64_queries", |b| {
        b.iter(|| solve_batch(black_box(&network), black_box(&batch), &options));
    });
}

criterion_group!(benches, bench_single_query, bench_batch);
criterion_main!(benches);
