use std::io::Cursor;
use std::sync::{Arc, Mutex, atomic::{AtomicBool, Ordering}, mpsc};
use std::thread;
use tiny_http::Response;

use euclid_nn::{train_loop, StepStats, TrailRenderer, TrainConfig};

use crate::state::{FlashMessage, RunStatus, SharedState};

// ---------------------------------------------------------------------------
// POST /run/start
// ---------------------------------------------------------------------------

pub fn handle_start(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();

    // If already running, don't start another.
    if st.is_running() {
        drop(st);
        return crate::routes::redirect("/");
    }

    if st.scenario.source == st.scenario.target {
        st.flash = Some(FlashMessage::error(
            "Source and target coincide; fix the scenario before starting.",
        ));
        drop(st);
        return crate::routes::redirect("/");
    }

    let scenario = st.scenario.clone();
    let params = st.params.clone();

    let (tx, rx) = mpsc::channel::<StepStats>();
    let stop_flag = Arc::new(AtomicBool::new(false));
    let step_rx = Arc::new(Mutex::new(rx));

    // Fresh trail per run; the old one stays alive only for open snapshots.
    let trail = euclid_nn::SharedTrail::default();
    st.trail = trail.clone();
    st.step_history.clear();
    st.run = RunStatus::Running {
        stop_flag: stop_flag.clone(),
        step_rx: step_rx.clone(),
    };
    drop(st);

    // Spawn the background training thread.
    let state_clone = state.clone();
    thread::spawn(move || {
        let neuron = scenario.neuron();
        // ~60 FPS pacing so the live trail is watchable, as in the original
        // demo window.
        let mut renderer =
            TrailRenderer::with_trail(trail).paced(std::time::Duration::from_millis(16));

        let mut config = TrainConfig::new(params.max_steps);
        config.step_size = params.step_size;
        config.tolerance = params.tolerance;
        config.progress_tx = Some(tx);
        config.stop_flag = Some(stop_flag);

        let t_start = std::time::Instant::now();
        let report = train_loop(&neuron, scenario.source, scenario.target, &mut renderer, &config);
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        let mut st = state_clone.lock().unwrap();

        // Drain any StepStats still in the channel into a local buffer first,
        // then push them; this avoids holding an immutable borrow on `st.run`
        // while mutably borrowing `st.step_history`.
        let remaining: Vec<StepStats> = {
            if let RunStatus::Running { step_rx, .. } = &st.run {
                let rx_guard = step_rx.lock().unwrap();
                let mut buf = Vec::new();
                while let Ok(s) = rx_guard.try_recv() {
                    buf.push(s);
                }
                buf
            } else {
                Vec::new()
            }
        };
        for s in remaining {
            st.step_history.push(s);
        }

        st.run = RunStatus::Done { report, elapsed_ms };
    });

    crate::routes::redirect("/")
}

// ---------------------------------------------------------------------------
// POST /run/stop
// ---------------------------------------------------------------------------

pub fn handle_stop(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    if let RunStatus::Running { stop_flag, .. } = &st.run {
        stop_flag.store(true, Ordering::Relaxed);
    }
    drop(st);
    crate::routes::redirect("/")
}
