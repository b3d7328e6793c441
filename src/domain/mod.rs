//! Core domain types
//!
//! Pure types with no I/O dependencies. These represent the core concepts
//! of the generator: parameter sets, waveforms, filter choices and errors.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
