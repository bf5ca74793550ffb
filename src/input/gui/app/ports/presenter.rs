use std::sync::Arc;

use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::MazeControllerPresenterPort;

/// Window-side half of a presenter: draws the latest maze frame with the
/// egui panel on top.
pub trait GuiPresenterPort {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    /// The port handed to the maze controller.
    fn share_adapter(&self) -> Arc<dyn MazeControllerPresenterPort>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    fn last_error_message(&self) -> Option<&str>;
}
