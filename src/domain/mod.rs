//! Domain types for the portfolio backend.
//!
//! Both record kinds are flat and carry no references to each other.

mod certification;
mod project;

pub use certification::*;
pub use project::*;
