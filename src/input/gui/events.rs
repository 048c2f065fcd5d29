/// Custom user events for the GUI event loop.
///
/// The sort worker sends these through the presenter adapter to wake the
/// UI thread after publishing a step.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The array or the highlighted step may have changed.
    ///
    /// The handler decides whether a redraw is needed; receiving this event
    /// does not request one by itself.
    Wake,
}
