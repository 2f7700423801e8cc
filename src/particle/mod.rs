// particle/mod.rs
// Re-exports for the particle module

mod spawn;
mod types;

pub use spawn::*;
pub use types::*;
