pub mod scenario;
pub mod run;
pub mod events;
pub mod snapshot;
