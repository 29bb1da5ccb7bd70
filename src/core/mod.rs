//! Core module - calculation, form state and platform glue

pub mod arith;
pub mod assets;
pub mod config;
pub mod decimal;
pub mod form;
pub mod format;
pub mod install;
pub mod numeric;
pub mod tolerance;
pub mod unit;

pub use arith::{calculate, Operator};
pub use assets::{
    AssetCache, AssetError, CacheManifest, CacheStorage, DirFetcher, Fetch, Response,
};
pub use config::{Config, ConfigError};
pub use format::OutputFormat;
pub use form::{FormEdit, FormEditError, WeighingForm};
pub use install::{InstallOutcome, InstallPrompt};
pub use tolerance::{compute, WeighingInput, WeighingResult, WeighingStatus};
pub use unit::Unit;
