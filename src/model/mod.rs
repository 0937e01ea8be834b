pub mod neuron;
pub mod scenario;

pub use neuron::FieldNeuron;
pub use scenario::Scenario;
