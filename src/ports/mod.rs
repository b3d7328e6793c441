//! Port traits (interfaces)
//!
//! These traits define the boundaries between the core domain and external I/O.
//! Adapters implement these traits to connect to files or memory.

pub mod export;
pub mod profiles;

pub use export::*;
pub use profiles::*;
