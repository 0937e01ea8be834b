/// euclid-nn viewer
///
/// A browser-based 2D view of the single-neuron training run: live trail of
/// past point pairs, the current pair, wheel zoom, and a PNG snapshot.
/// Served by a synchronous tiny_http server; no JavaScript frameworks.
///
/// Run with:
///   cargo run --bin viewer --release
/// Then open http://127.0.0.1:7878

mod state;
mod render;
mod routes;
mod handlers;
mod util;

use std::sync::{Arc, Mutex};
use tiny_http::Server;

use state::ViewerState;

fn main() {
    let addr = "127.0.0.1:7878";
    let server = Server::http(addr).expect("Failed to bind HTTP server");

    let shared_state = Arc::new(Mutex::new(ViewerState::new()));

    println!("euclid-nn viewer");
    println!("  open http://{} in your browser", addr);
    println!("  scroll to zoom, Escape to stop a run");

    // Each request is dispatched on its own thread so the SSE handler
    // (which blocks for the entire run) does not stall page loads and
    // form submissions.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
}
