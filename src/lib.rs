pub mod geometry;
pub mod physics;
pub mod activation;
pub mod model;
pub mod train;
pub mod render;

// Convenience re-exports
pub use geometry::point::Point;
pub use physics::coulomb::{coulomb_force, PhysicsError};
pub use physics::update::update_target;
pub use activation::activation::ActivationFunction;
pub use model::neuron::FieldNeuron;
pub use model::scenario::Scenario;
pub use train::trainer::train_loop;
pub use train::train_config::TrainConfig;
pub use train::step_stats::StepStats;
pub use train::outcome::{TrainOutcome, TrainReport};
pub use render::renderer::Renderer;
pub use render::console::ConsoleRenderer;
pub use render::trail::{SharedTrail, TrailRenderer};
