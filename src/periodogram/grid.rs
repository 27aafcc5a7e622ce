use log::debug;
use crate::periodogram::{PeriodogramError, SampleSet};
/// `n` evenly spaced values from `start` to `end`, both endpoints included.
///
/// The last element is pinned to `end` so accumulated rounding never moves it.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = end;
            out
        }
    }
}
/// Median of a non-empty slice; the mean of the two middle values for even lengths.
pub(crate) fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(0.5 * (sorted[mid - 1] + sorted[mid]))
    } else {
        Some(sorted[mid])
    }
}
/// Strictly increasing, strictly positive frequencies to evaluate.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyGrid {
    frequencies: Vec<f64>,
}
impl FrequencyGrid {
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
    pub fn min_frequency(&self) -> f64 {
        self.frequencies[0]
    }
    pub fn max_frequency(&self) -> f64 {
        self.frequencies[self.frequencies.len() - 1]
    }
    /// Spacing between neighbouring bins.
    pub fn step(&self) -> f64 {
        (self.max_frequency() - self.min_frequency()) / (self.len() - 1) as f64
    }
}
/// Derives the frequency axis from the span and spacing of a working sequence.
#[derive(Clone, Copy, Debug)]
pub struct FrequencyGridBuilder {
    max_points: usize,
}
impl FrequencyGridBuilder {
    pub fn with_budget(max_points: usize) -> Self {
        Self { max_points }
    }
    /// One bin per working sample, linearly spaced from `1 / span` up to the
    /// median-spacing Nyquist estimate `1 / (2 * median(dt))`.
    pub fn build(&self, working: &SampleSet) -> Result<FrequencyGrid, PeriodogramError> {
        let n = working.len();
        if n > self.max_points {
            return Err(PeriodogramError::GridBudgetExceeded {
                requested: n,
                budget: self.max_points,
            });
        }
        let span = working.span();
        if !(span.is_finite() && span > 0.0) {
            return Err(PeriodogramError::InsufficientData(format!(
                "time span {span} is not positive"
            )));
        }
        let median_dt = median(&working.deltas()).ok_or_else(|| {
            PeriodogramError::InsufficientData("no consecutive time differences".into())
        })?;
        let f_min = 1.0 / span;
        let f_max = 1.0 / (2.0 * median_dt);
        if !(f_min.is_finite() && f_max.is_finite()) {
            return Err(PeriodogramError::InsufficientData(format!(
                "non-finite frequency bounds [{f_min}, {f_max}]"
            )));
        }
        if f_max <= f_min {
            return Err(PeriodogramError::InsufficientData(format!(
                "collapsed frequency range: Nyquist estimate {f_max} does not exceed 1 / span = {f_min}"
            )));
        }
        debug!("frequency grid: {n} bins over [{f_min}, {f_max}]");
        Ok(FrequencyGrid {
            frequencies: linspace(f_min, f_max, n),
        })
    }
}
