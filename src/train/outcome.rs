use serde::{Serialize, Deserialize};

use crate::geometry::point::Point;

/// Terminal state of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainOutcome {
    /// `|output - desired_output|` fell within the tolerance band.
    Converged,
    /// Source and target coincided; the force law has no finite value there.
    Degenerate,
    /// The step budget ran out before reaching the tolerance band.
    DidNotConverge,
    /// The stop flag was raised, or the progress receiver disconnected.
    Stopped,
}

impl TrainOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainOutcome::Converged => "converged",
            TrainOutcome::Degenerate => "degenerate",
            TrainOutcome::DidNotConverge => "did-not-converge",
            TrainOutcome::Stopped => "stopped",
        }
    }
}

/// Summary of a finished run returned by `train_loop`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub outcome: TrainOutcome,
    /// Number of iterations that ran (including the terminal one).
    pub steps: usize,
    /// Activated output at termination; 0 when no iteration completed.
    pub final_output: f64,
    /// Error at termination. For `Converged` this is the in-band value that
    /// ended the run, not a synthetic zero.
    pub final_error: f64,
    /// Target position at termination.
    pub final_target: Point,
}
