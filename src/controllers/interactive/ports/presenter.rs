use crate::controllers::interactive::events::render::RenderEvent;

/// Receives every frame the maze worker produces. Called from the worker thread.
pub trait MazeControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
