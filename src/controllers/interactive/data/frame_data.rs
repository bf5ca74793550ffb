use crate::core::maze::MazeSnapshot;
use crate::core::util::grid_layout::GridLayout;

/// Everything a renderer needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameData {
    pub generation: u64,
    /// False after a clear or a rejected restart: paint the background only.
    pub render_enabled: bool,
    pub layout: GridLayout,
    pub snapshot: MazeSnapshot,
}
