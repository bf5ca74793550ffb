pub mod actions;
pub mod data;
pub mod maze;
pub mod util;
