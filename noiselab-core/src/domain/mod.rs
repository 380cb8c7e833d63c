//! Domain types shared across the engine.

pub mod position;
pub mod series;

pub use position::{Position, PositionTracker};
pub use series::{PriceSeries, SeriesError};
