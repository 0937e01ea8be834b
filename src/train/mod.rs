pub mod trainer;
pub mod step_stats;
pub mod train_config;
pub mod outcome;

pub use trainer::train_loop;
pub use step_stats::StepStats;
pub use train_config::TrainConfig;
pub use outcome::{TrainOutcome, TrainReport};
