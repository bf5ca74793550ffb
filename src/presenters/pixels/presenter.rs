use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::MazeControllerPresenterPort;
use crate::core::actions::rasterize_frame::rasterize_frame;
use crate::core::data::colour::MazePalette;
use crate::core::data::pixel_rect::PixelRect;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture, TextureError};
use std::sync::Arc;
use tracing::warn;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    palette: MazePalette,
    width: u32,
    height: u32,
    frame: Option<FrameData>,
    frame_drawn: bool,
    last_error_message: Option<String>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            palette: MazePalette::default(),
            width: size.width,
            height: size.height,
            frame: None,
            frame_drawn: false,
            last_error_message: None,
        })
    }

    /// Pulls the newest worker output from the adapter. A new frame clears
    /// the error message unless an error arrived alongside it.
    fn poll_adapter(&mut self) {
        if let Some(frame) = self.adapter.take_frame() {
            let newer = self
                .frame
                .as_ref()
                .is_none_or(|current| frame.generation > current.generation);

            if newer {
                if frame.render_enabled {
                    self.last_error_message = None;
                }
                self.frame = Some(frame);
                self.frame_drawn = false;
            }
        }

        if let Some(error) = self.adapter.take_error() {
            self.last_error_message = Some(error.message);
        }
    }

    fn draw_frame(&mut self) {
        if self.frame_drawn {
            return;
        }

        let Ok(pixel_rect) = PixelRect::from_size(self.width, self.height) else {
            return;
        };

        let result = match &self.frame {
            Some(frame) => rasterize_frame(
                &frame.snapshot,
                &frame.layout,
                frame.render_enabled,
                pixel_rect,
                &self.palette,
            ),
            None => rasterize_frame(
                &Default::default(),
                &Default::default(),
                false,
                pixel_rect,
                &self.palette,
            ),
        };

        match result.and_then(|buffer| buffer.write_rgba(self.pixels.frame_mut())) {
            Ok(()) => self.frame_drawn = true,
            Err(err) => warn!("failed to draw maze frame: {err}"),
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn MazeControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn MazeControllerPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.poll_adapter();
        self.draw_frame();

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // Keep the maze underneath the panel.
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        self.width = width;
        self.height = height;

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        self.frame_drawn = false;
        Ok(())
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}
