pub mod colour;
pub mod direction;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod tile;
pub mod tile_grid;
