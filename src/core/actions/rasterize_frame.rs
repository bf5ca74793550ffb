use rayon::prelude::*;

use crate::core::data::colour::{Colour, MazePalette};
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::tile::TileType;
use crate::core::maze::MazeSnapshot;
use crate::core::util::grid_layout::GridLayout;

/// Paints a maze snapshot into an RGB pixel buffer covering `pixel_rect`.
///
/// Pixels outside the maze area, and the whole buffer when `render_enabled` is
/// false, get the background colour. Rows are painted in parallel.
pub fn rasterize_frame(
    snapshot: &MazeSnapshot,
    layout: &GridLayout,
    render_enabled: bool,
    pixel_rect: PixelRect,
    palette: &MazePalette,
) -> Result<PixelBuffer, PixelBufferError> {
    let width = pixel_rect.width() as usize;
    let height = pixel_rect.height() as usize;
    let mut data = vec![0u8; width * height * BYTES_PER_PIXEL];

    let blocks = if render_enabled && !snapshot.is_empty() {
        Some(paint_blocks(snapshot, palette))
    } else {
        None
    };

    let block_columns = snapshot.columns * 2 + 1;
    let block_rows = snapshot.rows * 2 + 1;
    let side = i64::from(layout.tile_side.max(1));
    let origin = pixel_rect.top_left();

    data.par_chunks_mut(width * BYTES_PER_PIXEL)
        .enumerate()
        .for_each(|(row, pixels)| {
            let y = i64::from(origin.y) + row as i64 - i64::from(layout.offset_y);
            let block_y = block_index(y, side, block_rows);

            for (column, pixel) in pixels.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let x = i64::from(origin.x) + column as i64 - i64::from(layout.offset_x);

                let colour = match (&blocks, block_y, block_index(x, side, block_columns)) {
                    (Some(blocks), Some(block_y), Some(block_x)) => {
                        blocks[block_y * block_columns + block_x]
                    }
                    _ => palette.background,
                };

                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            }
        });

    PixelBuffer::from_data(pixel_rect, data)
}

fn block_index(coordinate: i64, side: i64, blocks: usize) -> Option<usize> {
    if coordinate < 0 {
        return None;
    }

    let block = (coordinate / side) as usize;
    (block < blocks).then_some(block)
}

/// One colour per block of the `(2 * columns + 1)` x `(2 * rows + 1)` block grid.
fn paint_blocks(snapshot: &MazeSnapshot, palette: &MazePalette) -> Vec<Colour> {
    let block_columns = snapshot.columns * 2 + 1;
    let block_rows = snapshot.rows * 2 + 1;
    let mut blocks = vec![palette.wall; block_columns * block_rows];

    let mut paint = |block_x: i64, block_y: i64, colour: Colour| {
        if block_x < 0 || block_y < 0 {
            return;
        }
        let (block_x, block_y) = (block_x as usize, block_y as usize);
        if block_x < block_columns && block_y < block_rows {
            blocks[block_y * block_columns + block_x] = colour;
        }
    };

    for (position, tile) in snapshot.iter() {
        let Some((tile_colour, link_colour)) = tile_colours(tile.tile_type, palette) else {
            continue;
        };

        let block_x = 2 * position.x as i64 + 1;
        let block_y = 2 * position.y as i64 + 1;
        let direction = tile.parent_direction;

        paint(block_x, block_y, tile_colour);
        paint(
            block_x + i64::from(direction.dx()),
            block_y + i64::from(direction.dy()),
            link_colour,
        );
    }

    if snapshot.exit_built {
        let colour = if snapshot.building_exit || snapshot.solution_exit_built {
            palette.focus
        } else {
            palette.floor
        };

        paint(2 * snapshot.columns as i64 - 1, 2 * snapshot.rows as i64, colour);
    }

    blocks
}

/// Colour of the tile block and of the passage towards its parent.
fn tile_colours(tile_type: TileType, palette: &MazePalette) -> Option<(Colour, Colour)> {
    match tile_type {
        TileType::Wall => None,
        TileType::Floor => Some((palette.floor, palette.floor)),
        TileType::Focus => Some((palette.focus, palette.floor)),
        TileType::Solution => Some((palette.focus, palette.focus)),
        TileType::FocusEntering => Some((palette.wall, palette.focus)),
        TileType::FocusLeaving | TileType::SolutionEntering => {
            Some((palette.floor, palette.focus))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::maze::Maze;

    fn layout(columns: usize, rows: usize, tile_side: u32) -> GridLayout {
        GridLayout {
            tile_side,
            columns,
            rows,
            offset_x: 0,
            offset_y: 0,
        }
    }

    fn colour_at(buffer: &PixelBuffer, x: i32, y: i32) -> Colour {
        buffer.pixel(Point { x, y }).expect("pixel is inside the buffer")
    }

    fn finished_maze(columns: usize, rows: usize) -> Maze {
        let mut maze = Maze::with_seed(5);
        maze.restart(columns, rows).unwrap();
        while !maze.maze_finished() {
            maze.step();
        }
        maze
    }

    #[test]
    fn test_disabled_render_is_all_background() {
        let maze = finished_maze(2, 2);
        let palette = MazePalette::default();
        let pixel_rect = PixelRect::from_size(10, 10).unwrap();

        let buffer =
            rasterize_frame(&maze.snapshot(), &layout(2, 2, 2), false, pixel_rect, &palette)
                .unwrap();

        assert!(
            buffer
                .buffer()
                .chunks_exact(3)
                .all(|p| p == [palette.background.r, palette.background.g, palette.background.b])
        );
    }

    #[test]
    fn test_fresh_maze_shows_wall_and_entering_start() {
        let mut maze = Maze::with_seed(1);
        maze.restart(2, 2).unwrap();
        let palette = MazePalette::default();
        let pixel_rect = PixelRect::from_size(5, 5).unwrap();

        let buffer =
            rasterize_frame(&maze.snapshot(), &layout(2, 2, 1), true, pixel_rect, &palette)
                .unwrap();

        // Entering start tile is drawn in wall colour with a focused entrance above it.
        assert_eq!(colour_at(&buffer, 1, 1), palette.wall);
        assert_eq!(colour_at(&buffer, 1, 0), palette.focus);
        assert_eq!(colour_at(&buffer, 3, 3), palette.wall);
        assert_eq!(colour_at(&buffer, 0, 0), palette.wall);
    }

    #[test]
    fn test_finished_maze_shows_floor_tiles_and_exit() {
        let maze = finished_maze(3, 2);
        let palette = MazePalette::default();
        let pixel_rect = PixelRect::from_size(7, 5).unwrap();

        let buffer =
            rasterize_frame(&maze.snapshot(), &layout(3, 2, 1), true, pixel_rect, &palette)
                .unwrap();

        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(colour_at(&buffer, 2 * x + 1, 2 * y + 1), palette.floor);
            }
        }
        // Entrance above the start tile and exit below the goal tile.
        assert_eq!(colour_at(&buffer, 1, 0), palette.floor);
        assert_eq!(colour_at(&buffer, 5, 4), palette.floor);
        // Block corners are never carved.
        assert_eq!(colour_at(&buffer, 0, 0), palette.wall);
        assert_eq!(colour_at(&buffer, 2, 2), palette.wall);
    }

    #[test]
    fn test_tile_side_scales_blocks_and_offset_shifts_them() {
        let maze = finished_maze(1, 1);
        let palette = MazePalette::default();
        let pixel_rect = PixelRect::from_size(12, 12).unwrap();
        let layout = GridLayout {
            tile_side: 3,
            columns: 1,
            rows: 1,
            offset_x: 1,
            offset_y: 2,
        };

        let buffer =
            rasterize_frame(&maze.snapshot(), &layout, true, pixel_rect, &palette).unwrap();

        assert_eq!(colour_at(&buffer, 0, 0), palette.background);
        assert_eq!(colour_at(&buffer, 1, 2), palette.wall);
        assert_eq!(colour_at(&buffer, 4, 5), palette.floor);
        assert_eq!(colour_at(&buffer, 6, 7), palette.floor);
        assert_eq!(colour_at(&buffer, 4, 8), palette.floor);
        assert_eq!(colour_at(&buffer, 9, 10), palette.wall);
        assert_eq!(colour_at(&buffer, 10, 10), palette.background);
    }

    #[test]
    fn test_solved_path_is_focus_coloured() {
        let mut maze = finished_maze(4, 4);
        while !maze.solution_finished() {
            maze.step();
        }
        let palette = MazePalette::default();
        let pixel_rect = PixelRect::from_size(9, 9).unwrap();

        let buffer =
            rasterize_frame(&maze.snapshot(), &layout(4, 4, 1), true, pixel_rect, &palette)
                .unwrap();

        assert_eq!(colour_at(&buffer, 1, 1), palette.focus);
        assert_eq!(colour_at(&buffer, 1, 0), palette.focus);
        assert_eq!(colour_at(&buffer, 7, 7), palette.focus);
        assert_eq!(colour_at(&buffer, 7, 8), palette.focus);
    }

    #[test]
    fn test_tile_colour_table() {
        let palette = MazePalette::default();

        assert_eq!(tile_colours(TileType::Wall, &palette), None);
        assert_eq!(
            tile_colours(TileType::Focus, &palette),
            Some((palette.focus, palette.floor))
        );
        assert_eq!(
            tile_colours(TileType::SolutionEntering, &palette),
            Some((palette.floor, palette.focus))
        );
    }
}
