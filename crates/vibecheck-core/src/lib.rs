//! VibeCheck Core Library
//!
//! Domain models, error taxonomy and upstream-response validation for the
//! VibeCheck task analyzer.

pub mod analysis;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AnalyzeError, AnalyzeResult};
