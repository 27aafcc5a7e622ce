use serde::{Deserialize, Serialize};
use crate::periodogram::engine::DEFAULT_PARALLEL_THRESHOLD;
use crate::periodogram::{OutputOrder, PeriodogramError};
/// Largest working sequence (and therefore grid) a single call may build.
pub const DEFAULT_MAX_GRID_POINTS: usize = 1 << 20;
/// Options recognized by a periodogram invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodogramConfig {
    pub time_col: String,
    pub value_col: String,
    /// Oversampling exponent `k`; the working grid is `2^k` times denser.
    pub interp_exp: i32,
    /// Order rows by frequency instead of period.
    pub freq_order: bool,
    pub max_grid_points: usize,
    pub parallel_threshold: usize,
}
impl Default for PeriodogramConfig {
    fn default() -> Self {
        Self {
            time_col: String::new(),
            value_col: String::new(),
            // Matches the command-line default of one doubling.
            interp_exp: 1,
            freq_order: false,
            max_grid_points: DEFAULT_MAX_GRID_POINTS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
impl PeriodogramConfig {
    pub fn new(time_col: impl Into<String>, value_col: impl Into<String>) -> Self {
        Self {
            time_col: time_col.into(),
            value_col: value_col.into(),
            ..Self::default()
        }
    }
    pub fn with_interp_exp(mut self, interp_exp: i32) -> Self {
        self.interp_exp = interp_exp;
        self
    }
    pub fn with_freq_order(mut self, freq_order: bool) -> Self {
        self.freq_order = freq_order;
        self
    }
    pub fn with_max_grid_points(mut self, max_grid_points: usize) -> Self {
        self.max_grid_points = max_grid_points;
        self
    }
    pub fn from_json(json: &str) -> Result<Self, PeriodogramError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
    /// Range checks that do not depend on the data.
    pub fn validate(&self) -> Result<(), PeriodogramError> {
        if self.interp_exp < 0 {
            return Err(PeriodogramError::NegativeExponent(self.interp_exp));
        }
        if self.max_grid_points < 2 {
            return Err(PeriodogramError::Config(format!(
                "max_grid_points must be at least 2, got {}",
                self.max_grid_points
            )));
        }
        Ok(())
    }
    /// Column names are only needed when reading from a [`crate::Table`].
    pub fn validate_columns(&self) -> Result<(), PeriodogramError> {
        if self.time_col.is_empty() || self.value_col.is_empty() {
            return Err(PeriodogramError::Config(
                "time and value column names are required".into(),
            ));
        }
        Ok(())
    }
    pub fn output_order(&self) -> OutputOrder {
        OutputOrder::from_freq_order(self.freq_order)
    }
}
