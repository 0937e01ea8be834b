use std::time::Duration;
use tiny_http::Request;

use crate::state::{RunStatus, SharedState};
use crate::util::sse::{format_sse_event, format_sse_keepalive, write_sse};

/// `GET /run/events` - Server-Sent Events handler.
///
/// This handler consumes `request` (takes ownership so we can call
/// `into_writer`) and drives a long-lived loop that:
/// 1. Replays the step history recorded so far.
/// 2. Tries to receive a `StepStats` from the run's channel with a 500 ms
///    timeout; on success writes an `event: step` frame.
/// 3. On timeout writes a keep-alive `: ping` comment.
/// 4. On channel disconnect (run finished) writes a `done` event carrying
///    the outcome, then closes.
///
/// Client reconnection is handled natively by `EventSource`.
pub fn handle(request: Request, state: SharedState) {
    // tiny_http's `into_writer()` gives us the raw TCP stream so we can
    // write the HTTP response and then stream SSE frames directly.
    let mut writer = request.into_writer();

    let header = "HTTP/1.1 200 OK\r\n\
                  Content-Type: text/event-stream\r\n\
                  Cache-Control: no-cache\r\n\
                  Connection: keep-alive\r\n\
                  X-Accel-Buffering: no\r\n\
                  \r\n";
    if !write_sse(&mut writer, header) {
        return;
    }

    // Clone the receiver handle out of state so we don't hold the lock.
    let step_rx = {
        let st = state.lock().unwrap();
        match &st.run {
            RunStatus::Running { step_rx, .. } => Some(step_rx.clone()),
            _ => None,
        }
    };

    // Replay history collected so far.
    {
        let st = state.lock().unwrap();
        for stats in &st.step_history {
            if let Ok(json) = serde_json::to_string(stats) {
                if !write_sse(&mut writer, &format_sse_event("step", &json)) {
                    return;
                }
            }
        }
    }

    let rx_arc = match step_rx {
        Some(r) => r,
        None => {
            // No run in flight; report the last outcome (if any) and close.
            let _ = write_sse(&mut writer, &done_event(&state));
            return;
        }
    };

    // Main receive loop.
    loop {
        let result = {
            let rx = rx_arc.lock().unwrap();
            rx.recv_timeout(Duration::from_millis(500))
        };

        match result {
            Ok(stats) => {
                {
                    let mut st = state.lock().unwrap();
                    st.step_history.push(stats.clone());
                }

                match serde_json::to_string(&stats) {
                    Ok(json) => {
                        if !write_sse(&mut writer, &format_sse_event("step", &json)) {
                            return;
                        }
                    }
                    Err(_) => continue,
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                if !write_sse(&mut writer, format_sse_keepalive()) {
                    return;
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                // The trainer closed the sender; the run thread has (or is
                // about to have) published its report.
                let _ = write_sse(&mut writer, &done_event(&state));
                return;
            }
        }
    }
}

/// Builds the terminal `done` event from the current run status.
fn done_event(state: &SharedState) -> String {
    let st = state.lock().unwrap();
    match &st.run {
        RunStatus::Done { report, elapsed_ms } => format!(
            "event: done\ndata: {{\"outcome\":\"{}\",\"steps\":{},\"final_error\":{},\"elapsed_ms\":{}}}\n\n",
            report.outcome.as_str(),
            report.steps,
            report.final_error,
            elapsed_ms
        ),
        _ => "event: done\ndata: {}\n\n".to_owned(),
    }
}
