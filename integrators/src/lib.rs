//! Integrators

#[macro_use]
extern crate log;

mod direct;
mod direct_lighting;
mod path;

// Re-export.
pub use direct::*;
pub use direct_lighting::*;
pub use path::*;
