use log::{debug, info};
use crate::config::PeriodogramConfig;
use crate::periodogram::engine::PeriodogramEngine;
use crate::periodogram::error::PeriodogramError;
use crate::periodogram::grid::FrequencyGridBuilder;
use crate::periodogram::interpolate::Interpolator;
use crate::periodogram::order::{PeriodogramResult, ResultOrderer};
use crate::periodogram::samples::SampleSet;
use crate::table::Table;
/// High level pipeline: interpolate, build the grid, evaluate, order.
pub struct Periodogram {
    config: PeriodogramConfig,
}
impl Periodogram {
    pub fn new(config: PeriodogramConfig) -> Result<Self, PeriodogramError> {
        config.validate()?;
        Ok(Self { config })
    }
    pub fn config(&self) -> &PeriodogramConfig {
        &self.config
    }
    pub fn compute(&self, samples: &SampleSet) -> Result<PeriodogramResult, PeriodogramError> {
        let interpolator = Interpolator::new(self.config.interp_exp, self.config.max_grid_points)?;
        let working = interpolator.apply(samples)?;
        debug!(
            "working sequence: {} points over {}",
            working.len(),
            working.span()
        );
        let grid = FrequencyGridBuilder::with_budget(self.config.max_grid_points).build(&working)?;
        // Power always comes from the original samples, never the resample.
        let points = PeriodogramEngine::new(samples)
            .with_parallel_threshold(self.config.parallel_threshold)
            .compute(&grid);
        let result = ResultOrderer::order(points, self.config.output_order());
        if let Some(peak) = result.peak() {
            info!(
                "periodogram: {} bins, peak power {:.4} at frequency {:.6} (period {:.6})",
                result.len(),
                peak.power,
                peak.frequency,
                peak.period()
            );
        }
        Ok(result)
    }
    /// Reads the configured columns out of `table` and runs [`Periodogram::compute`].
    pub fn compute_table(&self, table: &Table) -> Result<PeriodogramResult, PeriodogramError> {
        self.config.validate_columns()?;
        let times = table.column(&self.config.time_col)?;
        let values = table.column(&self.config.value_col)?;
        // Rows may arrive in any order; ties keep their row order and are
        // still rejected by `SampleSet`.
        let mut rows: Vec<usize> = (0..times.len()).collect();
        rows.sort_by(|&a, &b| times[a].total_cmp(&times[b]));
        let samples = SampleSet::new(
            rows.iter().map(|&i| times[i]).collect(),
            rows.iter().map(|&i| values[i]).collect(),
        )?;
        self.compute(&samples)
    }
}
/// Table in, table out: the key column (`freq` or `period`) and `power`.
pub fn lomb_scargle(table: &Table, config: &PeriodogramConfig) -> Result<Table, PeriodogramError> {
    Periodogram::new(config.clone())?
        .compute_table(table)?
        .to_table(false)
}
