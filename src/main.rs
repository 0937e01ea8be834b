// Console demo: trains the default scenario and prints each step.
// For the 2D browser viewer, run:
//   cargo run --bin viewer

use std::process::ExitCode;

use euclid_nn::{train_loop, ConsoleRenderer, Renderer, Scenario, TrainConfig, TrainOutcome};

fn main() -> ExitCode {
    let scenario = Scenario::default();
    let neuron = scenario.neuron();
    let config = TrainConfig::default();
    let mut renderer = ConsoleRenderer::new();

    println!(
        "euclid-nn: magnitude {} toward output {}, source ({}, {}), target ({}, {})",
        scenario.input_magnitude,
        scenario.desired_output,
        scenario.source.x,
        scenario.source.y,
        scenario.target.x,
        scenario.target.y,
    );

    let report = train_loop(&neuron, scenario.source, scenario.target, &mut renderer, &config);

    println!(
        "{} after {} steps: output = {:.6}, error = {:.6}, target = ({:.4}, {:.4})",
        report.outcome.as_str(),
        report.steps,
        report.final_output,
        report.final_error,
        report.final_target.x,
        report.final_target.y,
    );

    renderer.run_event_loop_until_closed();
    renderer.shutdown();

    match report.outcome {
        TrainOutcome::Converged | TrainOutcome::Stopped => ExitCode::SUCCESS,
        TrainOutcome::Degenerate | TrainOutcome::DidNotConverge => ExitCode::FAILURE,
    }
}
