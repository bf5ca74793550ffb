/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The maze worker published a new frame or error.
    ///
    /// Receiving this event does not redraw by itself; the handler requests a
    /// redraw and the presenter picks up the latest event while rendering.
    Wake,
}
