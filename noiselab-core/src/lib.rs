//! NoiseLab Core — domain types, path simulator, strategy state machines.
//!
//! This crate contains the heart of the evaluation engine:
//! - Validated price series and the position state machine
//! - Rolling-window indicator primitives
//! - Stochastic path simulator (return resampling + injected noise)
//! - Three trading strategies behind one closed dispatch boundary
//! - Deterministic RNG hierarchy for reproducible parallel trials

pub mod domain;
pub mod indicators;
pub mod rng;
pub mod simulator;
pub mod strategies;

pub use domain::{Position, PositionTracker, PriceSeries, SeriesError};
pub use rng::SeedHierarchy;
pub use simulator::{simulate_path, ReturnStatistics, SimulateError, SimulationRequest};
pub use strategies::{Strategy, StrategyError, StrategySpec};
