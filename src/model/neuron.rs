use crate::activation::activation::ActivationFunction;
use crate::geometry::point::Point;
use crate::physics::coulomb::{coulomb_force, PhysicsError};

/// The single trainable unit: a fixed input magnitude driven through the
/// Coulomb force between two points and a rectifying activation.
///
/// The neuron holds no positional state; the trainer owns the points and
/// passes them in on every call.
#[derive(Debug, Clone)]
pub struct FieldNeuron {
    /// Fixed scalar weight applied to the force term.
    pub input_magnitude: f64,
    /// Convergence target for the activated output.
    pub desired_output: f64,
    pub activation: ActivationFunction,
}

impl FieldNeuron {
    pub fn new(input_magnitude: f64, desired_output: f64) -> FieldNeuron {
        FieldNeuron {
            input_magnitude,
            desired_output,
            activation: ActivationFunction::default(),
        }
    }

    /// Activated output for a pre-computed force value.
    pub fn respond(&self, force: f64) -> f64 {
        self.activation.function(self.input_magnitude * force)
    }

    /// Full forward pass: unit-charge Coulomb force between the two points,
    /// scaled by `input_magnitude`, then rectified.
    pub fn forward(&self, source: &Point, target: &Point) -> Result<f64, PhysicsError> {
        let force = coulomb_force(1.0, 1.0, source, target)?;
        Ok(self.respond(force))
    }

    /// Signed error for an output: `output - desired_output`. Positive error
    /// pushes the target outward, negative pulls it in.
    pub fn error(&self, output: f64) -> f64 {
        output - self.desired_output
    }
}
