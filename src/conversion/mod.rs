//! Conversion Module
//!
//! Turns flat ETS group address rows into device records grouped by
//! domain: row rules, per-device accumulation, category classification
//! and the output document.

pub mod accumulator;
pub mod aggregator;
pub mod classifier;
pub mod converter;
pub mod document;
pub mod rules;

pub use accumulator::*;
pub use aggregator::*;
pub use classifier::*;
pub use converter::*;
pub use document::*;
pub use rules::AddressField;
