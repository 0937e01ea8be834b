pub mod renderer;
pub mod console;
pub mod trail;

pub use renderer::Renderer;
pub use console::ConsoleRenderer;
pub use trail::{SharedTrail, TrailRenderer};
