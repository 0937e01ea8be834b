use std::io::Write;

// ---------------------------------------------------------------------------
// SSE stream helpers
// ---------------------------------------------------------------------------

/// Formats a named SSE event with a JSON data payload.
///
/// Output format (per SSE spec):
/// ```text
/// event: <name>\n
/// data: <json>\n
/// \n
/// ```
pub fn format_sse_event(event_name: &str, json_data: &str) -> String {
    format!("event: {}\ndata: {}\n\n", event_name, json_data)
}

/// A keep-alive SSE comment. Comments start with `:` and are ignored by
/// EventSource clients but prevent the connection from timing out.
pub fn format_sse_keepalive() -> &'static str {
    ": ping\n\n"
}

/// Writes a single SSE message to a writer, flushing immediately.
/// Returns `false` if the write failed (client disconnected).
pub fn write_sse<W: Write>(writer: &mut W, msg: &str) -> bool {
    writer.write_all(msg.as_bytes()).is_ok() && writer.flush().is_ok()
}
