//! Small helpers shared by the binary and tests

pub mod logging;
pub mod stats;
