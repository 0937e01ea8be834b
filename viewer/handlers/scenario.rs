use std::io::{Cursor, Read};
use tiny_http::{Request, Response};

use euclid_nn::Point;

use crate::render::{html_escape, render_page};
use crate::state::{FlashKind, FlashMessage, RunStatus, SharedState};
use crate::util::form::{form_f64, form_get, form_usize, parse_form};

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    let flash = st.take_flash();
    let scenario = st.scenario.clone();
    let params = st.params.clone();
    let is_running = st.is_running();
    let status_html = build_status_html(&st.run, st.step_history.len());
    drop(st);

    let flash_html = flash
        .as_ref()
        .map(|f| {
            let class = match f.kind {
                FlashKind::Success => "flash flash-success",
                FlashKind::Error => "flash flash-error",
            };
            format!("<div class=\"{}\">{}</div>", class, html_escape(&f.text))
        })
        .unwrap_or_default();

    crate::routes::html_response(render_page(is_running, |tmpl| {
        tmpl.replace("{{FLASH}}", &flash_html)
            .replace("{{STATUS}}", &status_html)
            .replace("{{NAME}}", &html_escape(&scenario.name))
            .replace("{{INPUT_MAGNITUDE}}", &scenario.input_magnitude.to_string())
            .replace("{{DESIRED_OUTPUT}}", &scenario.desired_output.to_string())
            .replace("{{SOURCE_X}}", &scenario.source.x.to_string())
            .replace("{{SOURCE_Y}}", &scenario.source.y.to_string())
            .replace("{{TARGET_X}}", &scenario.target.x.to_string())
            .replace("{{TARGET_Y}}", &scenario.target.y.to_string())
            .replace("{{STEP_SIZE}}", &params.step_size.to_string())
            .replace("{{TOLERANCE}}", &params.tolerance.to_string())
            .replace("{{MAX_STEPS}}", &params.max_steps.to_string())
    }))
}

fn build_status_html(run: &RunStatus, steps_seen: usize) -> String {
    match run {
        RunStatus::Idle => "<p class=\"hint\">No run yet. Save a scenario and press Start.</p>".into(),
        RunStatus::Running { .. } => format!(
            "<p class=\"status-running\">Running - {} steps so far.</p>",
            steps_seen
        ),
        RunStatus::Done { report, elapsed_ms } => format!(
            "<p class=\"status-done\">{} after {} steps in {:.1}s - final error {:.6}, target ({:.4}, {:.4}).</p>",
            report.outcome.as_str(),
            report.steps,
            *elapsed_ms as f64 / 1000.0,
            report.final_error,
            report.final_target.x,
            report.final_target.y,
        ),
    }
}

// ---------------------------------------------------------------------------
// POST /scenario/save
// ---------------------------------------------------------------------------

pub fn handle_save(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    if request.as_reader().read_to_string(&mut body).is_err() {
        let mut st = state.lock().unwrap();
        st.flash = Some(FlashMessage::error("Could not read form body."));
        return crate::routes::redirect("/");
    }
    let pairs = parse_form(&body);

    let parsed = parse_scenario_form(&pairs);

    let mut st = state.lock().unwrap();
    if st.is_running() {
        st.flash = Some(FlashMessage::error("Stop the current run before editing the scenario."));
        return crate::routes::redirect("/");
    }

    match parsed {
        Ok((name, input_magnitude, desired_output, source, target, step_size, tolerance, max_steps)) => {
            if source == target {
                st.flash = Some(FlashMessage::error(
                    "Source and target must not coincide; the force law is degenerate there.",
                ));
                return crate::routes::redirect("/");
            }
            st.scenario.name = name;
            st.scenario.input_magnitude = input_magnitude;
            st.scenario.desired_output = desired_output;
            st.scenario.source = source;
            st.scenario.target = target;
            st.params.step_size = step_size;
            st.params.tolerance = tolerance;
            st.params.max_steps = max_steps;
            st.flash = Some(FlashMessage::success("Scenario saved."));
        }
        Err(reason) => {
            st.flash = Some(FlashMessage::error(reason));
        }
    }

    crate::routes::redirect("/")
}

type ScenarioForm = (String, f64, f64, Point, Point, f64, f64, usize);

fn parse_scenario_form(pairs: &[(String, String)]) -> Result<ScenarioForm, String> {
    let name = form_get(pairs, "name").unwrap_or("default").trim();
    let name = if name.is_empty() { "default" } else { name };

    let input_magnitude = form_f64(pairs, "input_magnitude")?;
    let desired_output = form_f64(pairs, "desired_output")?;
    let source = Point::new(form_f64(pairs, "source_x")?, form_f64(pairs, "source_y")?);
    let target = Point::new(form_f64(pairs, "target_x")?, form_f64(pairs, "target_y")?);
    let step_size = form_f64(pairs, "step_size")?;
    let tolerance = form_f64(pairs, "tolerance")?;
    let max_steps = form_usize(pairs, "max_steps")?;

    if step_size <= 0.0 {
        return Err("Field 'step_size' must be positive.".into());
    }
    if tolerance <= 0.0 {
        return Err("Field 'tolerance' must be positive.".into());
    }

    Ok((
        name.to_owned(),
        input_magnitude,
        desired_output,
        source,
        target,
        step_size,
        tolerance,
        max_steps,
    ))
}

// ---------------------------------------------------------------------------
// POST /scenario/randomize
// ---------------------------------------------------------------------------

/// Places the target at a random position within the visible extent,
/// retrying the (vanishingly unlikely) draw that lands exactly on the source.
pub fn handle_randomize(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    if st.is_running() {
        st.flash = Some(FlashMessage::error("Stop the current run before randomizing."));
        return crate::routes::redirect("/");
    }

    let mut target = Point::random_in(8.0);
    while target == st.scenario.source {
        target = Point::random_in(8.0);
    }
    st.scenario.target = target;
    st.flash = Some(FlashMessage::success(format!(
        "Target moved to ({:.3}, {:.3}).",
        target.x, target.y
    )));

    crate::routes::redirect("/")
}
