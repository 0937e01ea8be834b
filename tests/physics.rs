//! Properties of the force law, activation, and position-update rule.

use euclid_nn::{coulomb_force, update_target, ActivationFunction, PhysicsError, Point};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

#[test]
fn distance_of_coincident_points_is_zero() {
    let p = Point::new(1.5, -2.25);
    assert_eq!(p.distance(&p), 0.0);
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-3.0, 7.5);
    let b = Point::new(2.0, -1.0);
    assert_close(a.distance(&b), b.distance(&a));
}

#[test]
fn distance_across_the_3_4_5_triangle() {
    assert_close(Point::new(0.0, 0.0).distance(&Point::new(4.0, 3.0)), 5.0);
}

// ---------------------------------------------------------------------------
// Activation
// ---------------------------------------------------------------------------

#[test]
fn thresholded_linear_passes_values_at_or_above_the_cutoff() {
    let act = ActivationFunction::default();
    assert_eq!(act.function(0.1), 0.1);
    assert_eq!(act.function(2.5), 2.5);
}

#[test]
fn thresholded_linear_zeroes_values_below_the_cutoff() {
    let act = ActivationFunction::default();
    assert_eq!(act.function(0.0999), 0.0);
    assert_eq!(act.function(0.0), 0.0);
    assert_eq!(act.function(-3.0), 0.0);
}

// ---------------------------------------------------------------------------
// Coulomb force
// ---------------------------------------------------------------------------

#[test]
fn unit_charges_across_the_3_4_5_triangle() {
    let force = coulomb_force(1.0, 1.0, &Point::new(0.0, 0.0), &Point::new(4.0, 3.0))
        .expect("non-degenerate geometry");
    assert_close(force, 0.04);
}

#[test]
fn force_scales_with_the_charge_product_magnitude() {
    // Sign of the charges does not matter; only |q1 * q2| enters.
    let force = coulomb_force(2.0, -3.0, &Point::new(0.0, 0.0), &Point::new(4.0, 3.0))
        .expect("non-degenerate geometry");
    assert_close(force, 6.0 * 0.04);
}

#[test]
fn coincident_charges_are_degenerate() {
    let p = Point::new(0.0, 0.0);
    let result = coulomb_force(1.0, 1.0, &p, &p);
    assert_eq!(result, Err(PhysicsError::DegenerateGeometry { at: p }));
}

// ---------------------------------------------------------------------------
// Update rule
// ---------------------------------------------------------------------------

#[test]
fn zero_error_leaves_the_target_unchanged() {
    let source = Point::new(0.0, 0.0);
    let target = Point::new(4.0, 3.0);
    assert_eq!(update_target(&source, &target, 0.0, 0.1), target);
}

#[test]
fn negative_error_moves_the_target_toward_the_source() {
    let source = Point::new(0.0, 0.0);
    let target = Point::new(4.0, 3.0);
    let moved = update_target(&source, &target, -1.0, 0.1);
    assert!(source.distance(&moved) < source.distance(&target));
    assert_close(source.distance(&moved), 4.9);
}

#[test]
fn positive_error_moves_the_target_away_from_the_source() {
    let source = Point::new(0.0, 0.0);
    let target = Point::new(4.0, 3.0);
    let moved = update_target(&source, &target, 1.0, 0.1);
    assert!(source.distance(&moved) > source.distance(&target));
    assert_close(source.distance(&moved), 5.1);
}

#[test]
fn coincident_points_make_the_update_a_no_op() {
    let p = Point::new(2.0, 2.0);
    assert_eq!(update_target(&p, &p, -1.0, 0.1), p);
}
