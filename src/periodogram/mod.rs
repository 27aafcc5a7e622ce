// src/periodogram/mod.rs
// Pipeline stages, leaves first.
pub mod engine;
pub mod error;
pub mod grid;
pub mod interpolate;
pub mod order;
pub mod pipeline;
pub mod samples;
// Re-export the stage types so callers can stay at the crate root.
pub use engine::PeriodogramEngine;
pub use error::{ErrorKind, PeriodogramError};
pub use grid::{linspace, FrequencyGrid, FrequencyGridBuilder};
pub use interpolate::Interpolator;
pub use order::{OutputOrder, PeriodogramPoint, PeriodogramResult, ResultOrderer};
pub use pipeline::{lomb_scargle, Periodogram};
pub use samples::SampleSet;
