/// Template renderer for the euclid-nn viewer.
///
/// The viewer is a single HTML page (`viewer/assets/viewer.html`) with
/// placeholder tokens like `{{TOKEN}}`. The template is embedded at compile
/// time; `render_page` resolves the globally known placeholders and lets the
/// caller fill the rest through a closure. Unfilled tokens are blanked so a
/// missed placeholder never leaks into the browser.

const TEMPLATE: &str = include_str!("assets/viewer.html");

/// Renders the full viewer page.
///
/// # Arguments
/// - `running` - whether a run is currently active (drives the JS and the
///               enabled state of the form buttons)
/// - `fill`    - closure that fills page-specific placeholders
pub fn render_page<F>(running: bool, fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let mut html = TEMPLATE.to_owned();

    html = html.replace("{{RUNNING}}", if running { "true" } else { "false" });

    html = fill(html);

    blank_remaining(html)
}

/// Replaces any `{{TOKEN}}` that wasn't substituted with an empty string.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}

/// Minimal HTML escaping for values interpolated into the page.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
