use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    /// Rectifier with a configurable cutoff: passes `x` through when
    /// `x >= threshold`, returns 0 below it. With a non-zero threshold this
    /// is deliberately *not* a standard ReLU; the field neuron uses it with
    /// a cutoff of 0.1 so that weak far-field forces read as silence.
    ThresholdedLinear { threshold: f64 },
    ReLU,
    Identity,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ThresholdedLinear { threshold } => {
                if x >= *threshold { x } else { 0.0 }
            }
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Identity => x,
        }
    }
}

impl Default for ActivationFunction {
    fn default() -> Self {
        ActivationFunction::ThresholdedLinear { threshold: 0.1 }
    }
}
