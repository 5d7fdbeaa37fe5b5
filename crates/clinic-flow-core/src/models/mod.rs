//! Domain models for the clinic-flow system.

mod record;
mod treatment;

pub use record::*;
pub use treatment::*;
