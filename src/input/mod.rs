//! Input adapters for the maze animator.

#[cfg(feature = "gui")]
pub mod gui;
