use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::geometry::point::Point;
use crate::render::renderer::Renderer;

/// Trail of (source, target) pairs shared between the trainer thread and
/// whatever draws it.
pub type SharedTrail = Arc<Mutex<Vec<(Point, Point)>>>;

/// Records every frame into a shared trail instead of drawing it.
///
/// The web viewer hands the trail to its snapshot rasterizer; integration
/// tests read it back to check what the trainer emitted.
#[derive(Debug, Default)]
pub struct TrailRenderer {
    trail: SharedTrail,
    /// Optional per-frame sleep. Display pacing only; never a correctness
    /// mechanism.
    frame_delay: Option<Duration>,
}

impl TrailRenderer {
    pub fn new() -> TrailRenderer {
        TrailRenderer { trail: Arc::new(Mutex::new(Vec::new())), frame_delay: None }
    }

    /// Wraps an existing trail so the caller keeps a handle to it.
    pub fn with_trail(trail: SharedTrail) -> TrailRenderer {
        TrailRenderer { trail, frame_delay: None }
    }

    /// Caps the frame rate by sleeping `delay` after each recorded frame,
    /// so a live view can keep up with the run.
    pub fn paced(mut self, delay: Duration) -> TrailRenderer {
        self.frame_delay = Some(delay);
        self
    }

    /// A clone of the shared trail handle.
    pub fn trail(&self) -> SharedTrail {
        self.trail.clone()
    }
}

impl Renderer for TrailRenderer {
    fn render_frame(&mut self, source: Point, target: Point) {
        self.trail.lock().unwrap().push((source, target));
        if let Some(delay) = self.frame_delay {
            std::thread::sleep(delay);
        }
    }

    fn run_event_loop_until_closed(&mut self) {
        // The owner of the trail decides when the view closes.
    }

    fn shutdown(&mut self) {}
}
