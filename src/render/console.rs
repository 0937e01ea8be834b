use crate::geometry::point::Point;
use crate::render::renderer::Renderer;

/// Prints each frame to stdout; the headless stand-in for a window.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    frames: usize,
}

impl ConsoleRenderer {
    pub fn new() -> ConsoleRenderer {
        ConsoleRenderer { frames: 0 }
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Renderer for ConsoleRenderer {
    fn render_frame(&mut self, source: Point, target: Point) {
        self.frames += 1;
        println!(
            "frame {:>5}  source=({:.4}, {:.4})  target=({:.4}, {:.4})",
            self.frames, source.x, source.y, target.x, target.y
        );
    }

    fn run_event_loop_until_closed(&mut self) {
        // No window to hold open.
    }

    fn shutdown(&mut self) {}
}
