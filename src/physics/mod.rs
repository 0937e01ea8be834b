pub mod coulomb;
pub mod update;

pub use coulomb::{coulomb_force, PhysicsError, COULOMB_K};
pub use update::update_target;
