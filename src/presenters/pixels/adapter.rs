use std::sync::{Mutex, PoisonError};
use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::MazeControllerPresenterPort;
use crate::input::gui::events::GuiEvent;

/// Hands events from the maze worker to the UI thread.
///
/// Only the newest frame and the newest error are kept, in separate slots, so
/// a frame published right after an error does not hide it.
pub struct PixelsAdapter {
    frame: Mutex<Option<FrameData>>,
    error: Mutex<Option<RenderError>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl MazeControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::Frame(frame) => {
                *self.frame.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame);
            }
            RenderEvent::Error(error) => {
                *self.error.lock().unwrap_or_else(PoisonError::into_inner) = Some(error);
            }
        }

        // The event loop is gone once the window closes.
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            frame: Mutex::new(None),
            error: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.frame
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub fn take_error(&self) -> Option<RenderError> {
        self.error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
