//! Lomb-Scargle periodogram for unevenly sampled time series.
//!
//! Samples optionally pass through an [`Interpolator`] that only refines the
//! [`FrequencyGrid`]; power is always evaluated on the original samples by the
//! [`PeriodogramEngine`], and [`ResultOrderer`] sorts the bins by frequency or
//! by period.
pub mod config;
pub mod distribution;
pub mod periodogram;
pub mod table;
pub use config::PeriodogramConfig;
pub use distribution::SamplingDistribution;
pub use periodogram::*;
pub use table::{Column, Table};
