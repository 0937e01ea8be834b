use std::sync::atomic::Ordering;

use crate::geometry::point::Point;
use crate::model::neuron::FieldNeuron;
use crate::physics::coulomb::coulomb_force;
use crate::physics::update::update_target;
use crate::render::renderer::Renderer;
use crate::train::outcome::{TrainOutcome, TrainReport};
use crate::train::step_stats::StepStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains the target position until the neuron's output enters the tolerance
/// band around `desired_output`, and returns a report of how the run ended.
///
/// # Arguments
/// - `neuron`   - the fixed unit; never modified
/// - `source`   - fixed reference position
/// - `target`   - starting trainable position; the loop owns the evolving copy
/// - `renderer` - receives one frame per completed update
/// - `config`   - rates, step budget, optional progress channel and stop flag
///
/// # Termination
/// The loop ends when one of these holds, in check order:
/// - the stop flag is raised or the progress receiver has been dropped
///   (`Stopped`),
/// - source and target coincide (`Degenerate`),
/// - `|error| <= config.tolerance` (`Converged`; the in-band error is kept
///   as-is rather than rounded to zero),
/// - `config.max_steps` iterations have run (`DidNotConverge`).
///
/// The single tolerance-band test is the only convergence predicate; an
/// exactly-on-target output is just the in-band case with zero error.
pub fn train_loop<R: Renderer>(
    neuron: &FieldNeuron,
    source: Point,
    mut target: Point,
    renderer: &mut R,
    config: &TrainConfig,
) -> TrainReport {
    let mut step = 0;
    let mut output = 0.0;
    let mut error = neuron.error(output);

    loop {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                return report(TrainOutcome::Stopped, step, output, error, target);
            }
        }

        let force = match coulomb_force(1.0, 1.0, &source, &target) {
            Ok(f) => f,
            Err(_) => return report(TrainOutcome::Degenerate, step, output, error, target),
        };

        step += 1;
        output = neuron.respond(force);
        error = neuron.error(output);

        if let Some(ref tx) = config.progress_tx {
            let stats = StepStats {
                step,
                force,
                output,
                error,
                distance: source.distance(&target),
                source,
                target,
            };
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                return report(TrainOutcome::Stopped, step, output, error, target);
            }
        }

        if error.abs() <= config.tolerance {
            return report(TrainOutcome::Converged, step, output, error, target);
        }
        if step >= config.max_steps {
            return report(TrainOutcome::DidNotConverge, step, output, error, target);
        }

        target = update_target(&source, &target, error, config.step_size);
        renderer.render_frame(source, target);
    }
}

fn report(
    outcome: TrainOutcome,
    steps: usize,
    final_output: f64,
    final_error: f64,
    final_target: Point,
) -> TrainReport {
    TrainReport { outcome, steps, final_output, final_error, final_target }
}
