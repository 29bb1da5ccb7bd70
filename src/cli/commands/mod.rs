//! CLI command implementations

pub mod assets;
pub mod calc;
pub mod check;
pub mod completions;
pub mod config;
pub mod form;
