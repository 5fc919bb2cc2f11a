//! Domain layer - Row type and port definitions
//!
//! This module defines the traits (ports) that the file adapters implement,
//! keeping the conversion pipeline independent of where rows come from.

pub mod ports;

pub use ports::*;
