use std::sync::{Arc, Mutex, atomic::AtomicBool, mpsc};

use euclid_nn::{Scenario, SharedTrail, StepStats, TrainReport};

// ---------------------------------------------------------------------------
// Run parameters
// ---------------------------------------------------------------------------

/// Loop rates kept separate from the Scenario so that a saved scenario stays
/// independent of how it is run.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub step_size: f64,
    pub tolerance: f64,
    pub max_steps: usize,
}

impl Default for RunParams {
    fn default() -> Self {
        RunParams { step_size: 0.1, tolerance: 0.01, max_steps: 10_000 }
    }
}

// ---------------------------------------------------------------------------
// Run lifecycle
// ---------------------------------------------------------------------------

pub enum RunStatus {
    /// No run has been started yet.
    Idle,
    /// Training is running in a background thread.
    Running {
        stop_flag: Arc<AtomicBool>,
        step_rx: Arc<Mutex<mpsc::Receiver<StepStats>>>,
    },
    /// The run reached a terminal state.
    Done {
        report: TrainReport,
        elapsed_ms: u64,
    },
}

// ---------------------------------------------------------------------------
// Flash messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum FlashKind { Success, Error }

#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Success, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        FlashMessage { kind: FlashKind::Error, text: text.into() }
    }
}

// ---------------------------------------------------------------------------
// Main state struct
// ---------------------------------------------------------------------------

pub struct ViewerState {
    /// Scenario edited through the form and used by the next run.
    pub scenario: Scenario,
    /// Loop rates for the next run.
    pub params: RunParams,
    /// Current run lifecycle state.
    pub run: RunStatus,
    /// All step stats from the most recent run, in order.
    pub step_history: Vec<StepStats>,
    /// Shared trail written by the run's `TrailRenderer`; read by the
    /// snapshot rasterizer.
    pub trail: SharedTrail,
    /// One-shot flash message for the next page render.
    pub flash: Option<FlashMessage>,
}

impl ViewerState {
    pub fn new() -> Self {
        ViewerState {
            scenario: Scenario::default(),
            params: RunParams::default(),
            run: RunStatus::Idle,
            step_history: Vec::new(),
            trail: SharedTrail::default(),
            flash: None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.run, RunStatus::Running { .. })
    }

    /// Takes and returns the current flash message, clearing it.
    pub fn take_flash(&mut self) -> Option<FlashMessage> {
        self.flash.take()
    }
}

/// Shared state type passed to every handler.
pub type SharedState = Arc<Mutex<ViewerState>>;
