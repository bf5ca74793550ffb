use egui::{Color32, Context, TextEdit};
use egui_winit::State as EguiWinitState;
use tracing::{debug, error};
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::controllers::interactive::MazeController;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ui_state::MazeUiState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum PanelCommand {
    Generate,
    Solve,
    Cancel,
}

pub struct GuiApp<T: GuiPresenterPort> {
    width: u32,
    height: u32,
    pub scale_factor: f64,
    presenter: T,
    pub controller: MazeController,
    ui_state: MazeUiState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: MazeController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        controller.set_viewport(size.width, size.height);

        Self {
            width: size.width,
            height: size.height,
            scale_factor,
            presenter,
            controller,
            ui_state: MazeUiState::default(),
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    /// Resizes the surface. The new size reaches the maze on the next Generate.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            error!("failed to resize surface to {width}x{height}: {err}");
        }
        self.controller.set_viewport(width, height);
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let mut command = None;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Maze")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.heading("Maze Animator");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Tile side (1-250):");
                        let mut edit =
                            TextEdit::singleline(&mut self.ui_state.tile_side_text).desired_width(60.0);
                        if self.ui_state.tile_side_invalid {
                            edit = edit.text_color(Color32::LIGHT_RED);
                        }
                        ui.add(edit);
                    });

                    ui.horizontal(|ui| {
                        ui.label("Step delay ms (0-1000):");
                        let mut edit = TextEdit::singleline(&mut self.ui_state.step_delay_text)
                            .desired_width(60.0);
                        if self.ui_state.step_delay_invalid {
                            edit = edit.text_color(Color32::LIGHT_RED);
                        }
                        ui.add(edit);
                    });

                    ui.horizontal(|ui| {
                        if ui.button("Generate").clicked() {
                            command = Some(PanelCommand::Generate);
                        }
                        if ui.button("Solve").clicked() {
                            command = Some(PanelCommand::Solve);
                        }
                        if ui.button("Cancel").clicked() {
                            command = Some(PanelCommand::Cancel);
                        }
                    });

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", self.width, self.height));
                    ui.label(format!("Steps: {}", self.controller.steps_taken()));
                    if self.controller.maze_finished() {
                        ui.label("Maze finished");
                    }
                    if let Some(message) = self.presenter.last_error_message() {
                        ui.separator();
                        ui.colored_label(Color32::LIGHT_RED, message);
                    }
                });
        });

        if let Some(command) = command {
            self.run_command(command);
        }

        output
    }

    fn run_command(&mut self, command: PanelCommand) {
        match command {
            PanelCommand::Generate => match self.ui_state.generate_request() {
                Some(request) => {
                    self.controller.set_tile_side(request.tile_side);
                    self.controller.set_step_delay(request.step_delay);
                    self.controller.set_viewport(self.width, self.height);
                    self.controller.restart();
                }
                None => {
                    self.controller.clear();
                }
            },
            PanelCommand::Solve => {
                if !self.controller.solve() {
                    debug!("solve rejected");
                }
            }
            PanelCommand::Cancel => {
                if !self.controller.clear() {
                    debug!("clear rejected: nothing is rendered");
                }
            }
        }
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
