//! Weighing tolerance tool
//!
//! Computes the ±2% acceptable range for a weighing from a theoretical weight
//! per portion and a portion count, converts between milligrams and grams,
//! and classifies a measured weight as pass or fail.

pub mod cli;
pub mod core;
