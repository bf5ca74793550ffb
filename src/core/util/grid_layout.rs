/// Size in pixels of the area a maze is drawn into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 750,
            height: 750,
        }
    }
}

/// Where a maze grid sits inside a viewport.
///
/// A grid of `columns` x `rows` tiles is drawn as `(2 * columns + 1)` x
/// `(2 * rows + 1)` square blocks of `tile_side` pixels: tiles on odd block
/// coordinates, walls and passages in between.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GridLayout {
    pub tile_side: u32,
    pub columns: usize,
    pub rows: usize,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl GridLayout {
    #[must_use]
    pub fn block_columns(&self) -> usize {
        self.columns * 2 + 1
    }

    #[must_use]
    pub fn block_rows(&self) -> usize {
        self.rows * 2 + 1
    }
}

/// Fits as many tiles as possible into `viewport`, keeping a one-block margin,
/// and centres the result. Yields zero columns or rows when the viewport is too
/// small for a single tile.
#[must_use]
pub fn calculate_grid_layout(viewport: Viewport, tile_side: u32) -> GridLayout {
    let tile_side = tile_side.max(1);
    let (columns, offset_x) = fit_axis(viewport.width, tile_side);
    let (rows, offset_y) = fit_axis(viewport.height, tile_side);

    GridLayout {
        tile_side,
        columns,
        rows,
        offset_x,
        offset_y,
    }
}

fn fit_axis(extent: u32, tile_side: u32) -> (usize, i32) {
    let extent = i64::from(extent);
    let side = i64::from(tile_side);

    let mut cells = extent / side - 2;
    cells -= cells / 2;
    let cells = cells.max(0);

    let offset = (extent - (cells * 2 + 1) * side) / 2;

    (cells as usize, offset as i32)
}
