// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use std::time::Duration;
use understory_focus_session::FocusSession;
use understory_spatial_nav::{Direction, FocusItem, GraphBuilder, NavGraph};

/// A `side × side` grid of 80×40 cells with a 10 unit gutter, every seventh hidden.
fn grid(side: u32) -> Vec<FocusItem<u32>> {
    let mut items = Vec::with_capacity((side * side) as usize);
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            let mut item = FocusItem::from_origin_size(
                id,
                f64::from(col) * 90.0,
                f64::from(row) * 50.0,
                80.0,
                40.0,
            );
            item.visible = id % 7 != 3;
            items.push(item);
        }
    }
    items
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("nav_graph/build");

    // Full builds are quadratic; the larger sizes show where a per-move rebuild stops being free.
    for side in [4_u32, 8, 16, 32] {
        let items = grid(side);
        let builder = GraphBuilder::default();
        group.throughput(Throughput::Elements(items.len() as u64));

        group.bench_with_input(BenchmarkId::new("build", items.len()), &items, |b, items| {
            b.iter(|| black_box(builder.build::<u32, _>(black_box(items))));
        });

        group.bench_with_input(
            BenchmarkId::new("build_into_reused", items.len()),
            &items,
            |b, items| {
                let mut graph = NavGraph::new();
                b.iter(|| {
                    builder.build_into(black_box(items), &mut graph);
                    black_box(graph.len());
                });
            },
        );
    }

    group.finish();
}

fn bench_single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("nav_graph/neighbor");

    for side in [4_u32, 8, 16, 32] {
        let items = grid(side);
        let builder = GraphBuilder::default();
        let source = (side / 2) * side + side / 2;

        group.bench_with_input(
            BenchmarkId::new("single_source", items.len()),
            &items,
            |b, items| {
                b.iter(|| {
                    for direction in Direction::ALL {
                        black_box(builder.neighbor(black_box(items), source, direction));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_session_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("nav_graph/session_move");
    group.sample_size(30);
    group.measurement_time(Duration::from_secs(3));

    for side in [8_u32, 16] {
        let items = grid(side);
        group.bench_with_input(
            BenchmarkId::new("walk_right_then_down", items.len()),
            &items,
            |b, items| {
                b.iter_batched(
                    || {
                        let mut session: FocusSession<u32, FocusItem<u32>> =
                            FocusSession::new((), ());
                        for item in items {
                            session.register(item.clone());
                        }
                        session.set_focus(0);
                        session
                    },
                    |mut session| {
                        for _ in 0..side {
                            session.move_focus(Direction::Right);
                            session.move_focus(Direction::Down);
                        }
                        black_box(session.focused());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_single_source, bench_session_moves);
criterion_main!(benches);
