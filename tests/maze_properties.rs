//! Grid-size-quantified properties of the maze state machine.

use maze_animator::{Maze, Position, TileType};
use proptest::prelude::*;

fn built_maze(seed: u64, columns: usize, rows: usize) -> (Maze, usize) {
    let mut maze = Maze::with_seed(seed);
    maze.restart(columns, rows).unwrap();

    let mut calls = 0;
    while !maze.maze_finished() {
        maze.step();
        calls += 1;
    }

    (maze, calls)
}

fn parent_of(maze: &Maze, position: Position) -> Option<Position> {
    let tile = maze.tiles().get(position)?;
    maze.tiles().neighbour(position, tile.parent_direction())
}

proptest! {
    #[test]
    fn prop_build_takes_four_calls_per_tile_plus_two(
        seed in any::<u64>(),
        columns in 1usize..12,
        rows in 1usize..12,
    ) {
        let (_, calls) = built_maze(seed, columns, rows);
        prop_assert_eq!(calls, 4 * columns * rows + 2);
    }

    #[test]
    fn prop_no_walls_after_build(
        seed in any::<u64>(),
        columns in 1usize..12,
        rows in 1usize..12,
    ) {
        let (maze, _) = built_maze(seed, columns, rows);

        prop_assert!(maze.tiles().iter().all(|(_, tile)| tile.tile_type() == TileType::Floor));
        prop_assert!(maze.exit_built());
        prop_assert!(!maze.building_exit());
    }

    #[test]
    fn prop_parent_chains_reach_start(
        seed in any::<u64>(),
        columns in 1usize..12,
        rows in 1usize..12,
    ) {
        let (maze, _) = built_maze(seed, columns, rows);
        let start = Position::new(0, 0);
        let limit = columns * rows;

        for (position, _) in maze.tiles().iter() {
            let mut current = position;
            let mut hops = 0;

            while current != start {
                prop_assert!(hops < limit, "no start within {} hops from {:?}", limit, position);
                current = parent_of(&maze, current).expect("parent stays inside the grid");
                hops += 1;
            }

            prop_assert_eq!(parent_of(&maze, start), None);
        }
    }

    #[test]
    fn prop_solution_runs_from_goal_to_start_along_parents(
        seed in any::<u64>(),
        columns in 1usize..12,
        rows in 1usize..12,
    ) {
        let (maze, _) = built_maze(seed, columns, rows);
        let goal = Position::new(columns - 1, rows - 1);
        let path = maze.trace_to_start(goal);

        prop_assert_eq!(path.first().copied(), Some(goal));
        prop_assert_eq!(path.last().copied(), Some(Position::new(0, 0)));
        for pair in path.windows(2) {
            prop_assert_eq!(parent_of(&maze, pair[0]), Some(pair[1]));
        }
        // Manhattan distance is a lower bound for any grid path.
        prop_assert!(path.len() >= columns + rows - 1);
    }

    #[test]
    fn prop_solving_takes_two_calls_per_path_tile_plus_three(
        seed in any::<u64>(),
        columns in 1usize..12,
        rows in 1usize..12,
    ) {
        let (mut maze, _) = built_maze(seed, columns, rows);
        let length = maze.trace_to_start(Position::new(columns - 1, rows - 1)).len();

        let mut calls = 0;
        while !maze.solution_finished() {
            maze.step();
            calls += 1;
        }

        prop_assert_eq!(calls, 2 * length + 3);
        prop_assert_eq!(maze.snapshot().count(TileType::Solution), length);
        prop_assert!(maze.solution_exit_built());
    }

    #[test]
    fn prop_step_is_noop_once_solved(
        seed in any::<u64>(),
        columns in 1usize..8,
        rows in 1usize..8,
        extra in 1usize..20,
    ) {
        let (mut maze, _) = built_maze(seed, columns, rows);
        while !maze.solution_finished() {
            maze.step();
        }

        let before = maze.snapshot();
        for _ in 0..extra {
            maze.step();
        }

        prop_assert_eq!(maze.snapshot(), before);
    }

    #[test]
    fn prop_restart_resets_from_any_point(
        seed in any::<u64>(),
        columns in 1usize..8,
        rows in 1usize..8,
        steps in 0usize..400,
    ) {
        let mut maze = Maze::with_seed(seed);
        maze.restart(columns, rows).unwrap();
        for _ in 0..steps {
            maze.step();
        }

        maze.restart(rows, columns).unwrap();
        let snapshot = maze.snapshot();

        prop_assert!(!snapshot.maze_finished);
        prop_assert!(!snapshot.solution_finished);
        prop_assert!(!snapshot.exit_built);
        prop_assert_eq!((snapshot.columns, snapshot.rows), (rows, columns));
        prop_assert_eq!(snapshot.tile(Position::new(0, 0)).map(|t| t.tile_type), Some(TileType::FocusEntering));
        prop_assert_eq!(snapshot.count(TileType::Wall), rows * columns - 1);
    }
}

#[test]
fn single_tile_maze_builds_in_six_calls() {
    let (mut maze, calls) = built_maze(0, 1, 1);

    assert_eq!(calls, 6);
    assert_eq!(maze.trace_to_start(Position::new(0, 0)), vec![Position::new(0, 0)]);

    let mut solve_calls = 0;
    while !maze.solution_finished() {
        maze.step();
        solve_calls += 1;
    }
    assert_eq!(solve_calls, 5);
}

#[test]
fn five_by_five_maze_builds_in_one_hundred_and_two_calls() {
    let (_, calls) = built_maze(42, 5, 5);
    assert_eq!(calls, 102);
}
