use serde::{Serialize, Deserialize};

use crate::geometry::point::Point;
use crate::model::neuron::FieldNeuron;

/// A fully serializable description of one training setup: the neuron's
/// constants plus the starting geometry.
///
/// `Scenario` can be saved to / loaded from JSON independently of how it is
/// run; step size, tolerance, and the step budget live in `TrainConfig`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable name used as the file stem when saved.
    pub name: String,
    /// Fixed scalar weight applied to the force term.
    pub input_magnitude: f64,
    /// Convergence target for the activated output.
    pub desired_output: f64,
    /// Fixed reference position; never moves.
    pub source: Point,
    /// Trainable position; adjusted every step.
    pub target: Point,
}

impl Scenario {
    /// Builds the neuron this scenario describes.
    pub fn neuron(&self) -> FieldNeuron {
        FieldNeuron::new(self.input_magnitude, self.desired_output)
    }

    /// Serializes the scenario to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `Scenario` from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Scenario> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl Default for Scenario {
    /// The canonical demo: magnitude 10 driven toward output 1, source at
    /// the origin, target on the 3-4-5 triangle.
    fn default() -> Self {
        Scenario {
            name: "default".to_owned(),
            input_magnitude: 10.0,
            desired_output: 1.0,
            source: Point::new(0.0, 0.0),
            target: Point::new(4.0, 3.0),
        }
    }
}
