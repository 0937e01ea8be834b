//! End-to-end behavior of the training loop and its terminal states.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use euclid_nn::{
    train_loop, FieldNeuron, Point, Scenario, StepStats, TrailRenderer, TrainConfig, TrainOutcome,
};

#[test]
fn neuron_forward_runs_the_whole_pipeline() {
    let neuron = FieldNeuron::new(10.0, 1.0);
    let source = Point::new(0.0, 0.0);

    let out = neuron.forward(&source, &Point::new(4.0, 3.0)).expect("non-degenerate");
    assert!((out - 0.4).abs() < 1e-12);
    assert!((neuron.error(out) + 0.6).abs() < 1e-12);

    assert!(neuron.forward(&source, &source).is_err());
}

#[test]
fn scenario_round_trips_through_json() {
    let mut scenario = Scenario::default();
    scenario.name = "roundtrip".to_owned();
    scenario.target = Point::new(-2.5, 6.0);

    let path = std::env::temp_dir().join(format!("euclid-nn-scenario-{}.json", std::process::id()));
    let path = path.to_str().unwrap().to_owned();

    scenario.save_json(&path).expect("save scenario");
    let loaded = Scenario::load_json(&path).expect("load scenario");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.name, "roundtrip");
    assert_eq!(loaded.target, scenario.target);
    assert_eq!(loaded.input_magnitude, scenario.input_magnitude);
}

#[test]
fn default_scenario_converges_inward() {
    let scenario = Scenario::default();
    let neuron = scenario.neuron();
    let mut renderer = TrailRenderer::new();
    let trail = renderer.trail();
    let config = TrainConfig::default();

    let report = train_loop(&neuron, scenario.source, scenario.target, &mut renderer, &config);

    assert_eq!(report.outcome, TrainOutcome::Converged);
    assert!(report.steps < config.max_steps);
    assert!(report.final_error.abs() <= config.tolerance);

    // Initial output is 10 * 0.04 = 0.4 < 1, so the error is negative and
    // the target drifts inward; the run settles where 10 / d^2 = 1.
    let final_distance = scenario.source.distance(&report.final_target);
    assert!(final_distance < 5.0);
    assert!((final_distance - 10.0_f64.sqrt()).abs() < 0.05);

    let trail = trail.lock().unwrap();
    assert!(!trail.is_empty());
    let (_, last_rendered) = *trail.last().unwrap();
    assert_eq!(last_rendered, report.final_target);
}

#[test]
fn exhausted_step_budget_reports_did_not_converge() {
    let scenario = Scenario::default();
    let neuron = scenario.neuron();
    let mut renderer = TrailRenderer::new();
    let config = TrainConfig::new(3);

    let report = train_loop(&neuron, scenario.source, scenario.target, &mut renderer, &config);

    assert_eq!(report.outcome, TrainOutcome::DidNotConverge);
    assert_eq!(report.steps, 3);
}

#[test]
fn coincident_start_is_degenerate() {
    let neuron = FieldNeuron::new(10.0, 1.0);
    let p = Point::new(1.0, 1.0);
    let mut renderer = TrailRenderer::new();
    let trail = renderer.trail();

    let report = train_loop(&neuron, p, p, &mut renderer, &TrainConfig::default());

    assert_eq!(report.outcome, TrainOutcome::Degenerate);
    assert_eq!(report.steps, 0);
    assert!(trail.lock().unwrap().is_empty());
}

#[test]
fn preset_stop_flag_halts_before_the_first_step() {
    let scenario = Scenario::default();
    let neuron = scenario.neuron();
    let mut renderer = TrailRenderer::new();

    let mut config = TrainConfig::default();
    let flag = Arc::new(AtomicBool::new(false));
    flag.store(true, Ordering::Relaxed);
    config.stop_flag = Some(flag);

    let report = train_loop(&neuron, scenario.source, scenario.target, &mut renderer, &config);

    assert_eq!(report.outcome, TrainOutcome::Stopped);
    assert_eq!(report.steps, 0);
}

#[test]
fn dropped_progress_receiver_stops_the_run() {
    let scenario = Scenario::default();
    let neuron = scenario.neuron();
    let mut renderer = TrailRenderer::new();

    let (tx, rx) = mpsc::channel::<StepStats>();
    drop(rx);
    let mut config = TrainConfig::default();
    config.progress_tx = Some(tx);

    let report = train_loop(&neuron, scenario.source, scenario.target, &mut renderer, &config);

    assert_eq!(report.outcome, TrainOutcome::Stopped);
    assert_eq!(report.steps, 1);
}

#[test]
fn progress_channel_reports_forces_and_a_shrinking_distance() {
    let scenario = Scenario::default();
    let neuron = scenario.neuron();
    let mut renderer = TrailRenderer::new();

    let (tx, rx) = mpsc::channel::<StepStats>();
    let mut config = TrainConfig::default();
    config.progress_tx = Some(tx);

    let report = train_loop(&neuron, scenario.source, scenario.target, &mut renderer, &config);
    assert_eq!(report.outcome, TrainOutcome::Converged);

    let stats: Vec<StepStats> = rx.try_iter().collect();
    assert_eq!(stats.len(), report.steps);

    let first = &stats[0];
    assert_eq!(first.step, 1);
    assert!((first.force - 0.04).abs() < 1e-12);
    assert!((first.output - 0.4).abs() < 1e-12);
    assert!((first.error + 0.6).abs() < 1e-12);
    assert_eq!(first.distance, 5.0);

    // The error stays negative for this scenario, so the recorded distance
    // shrinks strictly on every step.
    for pair in stats.windows(2) {
        assert!(pair[1].distance < pair[0].distance);
    }

    assert!(stats.last().unwrap().error.abs() <= config.tolerance);
}

#[test]
fn far_target_below_the_activation_threshold_still_converges() {
    // At distance 50 the drive is 10 / 2500 = 0.004, under the 0.1 cutoff,
    // so the output starts at 0 and the error at -1. The constant inward
    // drift eventually lifts the drive above the threshold.
    let neuron = FieldNeuron::new(10.0, 1.0);
    let source = Point::new(0.0, 0.0);
    let target = Point::new(30.0, 40.0);
    let mut renderer = TrailRenderer::new();

    let (tx, rx) = mpsc::channel::<StepStats>();
    let mut config = TrainConfig::default();
    config.progress_tx = Some(tx);

    let report = train_loop(&neuron, source, target, &mut renderer, &config);

    assert_eq!(report.outcome, TrainOutcome::Converged);

    let first = rx.try_iter().next().unwrap();
    assert_eq!(first.output, 0.0);
    assert_eq!(first.error, -1.0);

    let final_distance = source.distance(&report.final_target);
    assert!((final_distance - 10.0_f64.sqrt()).abs() < 0.05);
}
