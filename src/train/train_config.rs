use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};

use crate::train::step_stats::StepStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_steps`   - step budget; exhausting it ends the run as
///                   `DidNotConverge` instead of looping forever
/// - `step_size`   - update rate of the position rule (the original demo's
///                   `passo`)
/// - `tolerance`   - convergence band on `|output - desired_output|`
/// - `progress_tx` - optional channel sender; one `StepStats` is sent per
///                   iteration. If the receiver is dropped the loop
///                   terminates early (clean shutdown).
/// - `stop_flag`   - optional atomic flag; when set to `true` from another
///                   thread the loop terminates before the next iteration.
pub struct TrainConfig {
    pub max_steps: usize,
    pub step_size: f64,
    pub tolerance: f64,
    pub progress_tx: Option<mpsc::Sender<StepStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with the demo's rates and no progress channel
    /// or stop flag.
    pub fn new(max_steps: usize) -> Self {
        TrainConfig {
            max_steps,
            step_size: 0.1,
            tolerance: 0.01,
            progress_tx: None,
            stop_flag: None,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(10_000)
    }
}
