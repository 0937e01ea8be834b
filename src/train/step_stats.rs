use serde::{Serialize, Deserialize};

use crate::geometry::point::Point;

/// Per-iteration training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the loop
/// sends one `StepStats` value per iteration. Receivers (e.g. the viewer's
/// SSE handler) use this to drive the live trail and readouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepStats {
    /// 1-based step number.
    pub step: usize,
    /// Unit-charge Coulomb force for this step's geometry.
    pub force: f64,
    /// Activated output (`input_magnitude * force` after rectification).
    pub output: f64,
    /// Signed error: `output - desired_output`.
    pub error: f64,
    /// Distance from source to target before this step's update.
    pub distance: f64,
    /// Fixed source position (repeated so each event is self-contained).
    pub source: Point,
    /// Target position before this step's update.
    pub target: Point,
}
