use crate::geometry::point::Point;

/// The display surface as the trainer sees it.
///
/// The training loop knows nothing about trail storage, pixel conversion,
/// or zoom; it only hands over point pairs through this trait. Any display
/// shell (console trace, shared trail behind the web viewer, a test recorder)
/// plugs in here.
pub trait Renderer {
    /// Appends the pair to the display's trail and redraws. Called once per
    /// completed update; the return value is never consulted by the trainer.
    fn render_frame(&mut self, source: Point, target: Point);

    /// Blocks until the end user closes the view. Called once, after the
    /// trainer reaches a terminal state. Headless implementations return
    /// immediately.
    fn run_event_loop_until_closed(&mut self);

    /// Releases display resources.
    fn shutdown(&mut self);
}
