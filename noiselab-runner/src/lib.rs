//! NoiseLab Runner — noise sweeps, profit statistics, resilience scoring.
//!
//! This crate builds on `noiselab-core` to provide:
//! - The evaluation harness: N trials per noise level on rayon, with
//!   deterministic per-trial seeding
//! - Profit-sample statistics and the resilience index
//! - Result rows and per-strategy reports (serde)
//! - CSV price loading and TOML sweep configuration

pub mod config;
pub mod data_loader;
pub mod harness;
pub mod metrics;
pub mod result;
pub mod scoring;

pub use config::{ConfigError, EvalConfig};
pub use data_loader::{load_close_series, parse_close_series, LoadError};
pub use harness::{evaluate, evaluate_spec, run_evaluation, EvalError};
pub use metrics::{mean, population_std_dev};
pub use result::{EvaluationReport, NoiseLevelResult};
pub use scoring::resilience_index;
