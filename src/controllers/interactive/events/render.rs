use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;

#[derive(Debug, Clone)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}
