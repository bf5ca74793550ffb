//! Benchmarks for stepping and rasterizing mazes.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use maze_animator::{
    Maze, MazePalette, PixelRect, Viewport, calculate_grid_layout, rasterize_frame,
};

fn solved_maze(seed: u64, columns: usize, rows: usize) -> Maze {
    let mut maze = Maze::with_seed(seed);
    maze.restart(columns, rows).unwrap();
    while !maze.solution_finished() {
        maze.step();
    }
    maze
}

fn bench_build_and_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_and_solve");

    for side in [12usize, 64, 187] {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            b.iter(|| solved_maze(black_box(7), side, side))
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let maze = solved_maze(7, 187, 187);

    c.bench_function("snapshot_187x187", |b| b.iter(|| black_box(&maze).snapshot()));
}

fn bench_rasterize(c: &mut Criterion) {
    let viewport = Viewport::default();
    let palette = MazePalette::default();
    let pixel_rect = PixelRect::from_size(viewport.width, viewport.height).unwrap();
    let mut group = c.benchmark_group("rasterize_750x750");

    for tile_side in [2u32, 30] {
        let layout = calculate_grid_layout(viewport, tile_side);
        let snapshot = solved_maze(7, layout.columns, layout.rows).snapshot();

        group.bench_with_input(
            BenchmarkId::from_parameter(tile_side),
            &tile_side,
            |b, _| {
                b.iter(|| {
                    rasterize_frame(black_box(&snapshot), &layout, true, pixel_rect, &palette)
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build_and_solve, bench_snapshot, bench_rasterize);
criterion_main!(benches);
