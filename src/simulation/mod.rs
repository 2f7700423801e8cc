// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod collision;
pub mod simulation;
pub mod stats;
pub use simulation::*;
pub use stats::*;
