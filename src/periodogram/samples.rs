use crate::periodogram::PeriodogramError;
/// Immutable (time, value) pairs: finite values, strictly increasing finite times.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
    times: Vec<f64>,
    values: Vec<f64>,
}
impl SampleSet {
    /// Validates and takes ownership of the two sequences.
    ///
    /// Times are never re-sorted here: a duplicate or out-of-order timestamp
    /// is reported as an error so upstream bugs stay visible.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, PeriodogramError> {
        if times.len() != values.len() {
            return Err(PeriodogramError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if times.len() < 2 {
            return Err(PeriodogramError::TooFewSamples {
                actual: times.len(),
            });
        }
        if let Some((index, &value)) = times.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            return Err(PeriodogramError::NonFiniteTime { index, value });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, y)| !y.is_finite()) {
            return Err(PeriodogramError::NonFiniteValue { index, value });
        }
        if let Some(index) = (1..times.len()).find(|&i| times[i] <= times[i - 1]) {
            return Err(PeriodogramError::NonMonotonicTime {
                index,
                previous: times[index - 1],
                current: times[index],
            });
        }
        Ok(Self { times, values })
    }
    pub fn from_slices(times: &[f64], values: &[f64]) -> Result<Self, PeriodogramError> {
        Self::new(times.to_vec(), values.to_vec())
    }
    pub fn times(&self) -> &[f64] {
        &self.times
    }
    pub fn values(&self) -> &[f64] {
        &self.values
    }
    pub fn len(&self) -> usize {
        self.times.len()
    }
    /// Always false for a constructed set; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
    pub fn t_min(&self) -> f64 {
        self.times[0]
    }
    pub fn t_max(&self) -> f64 {
        self.times[self.times.len() - 1]
    }
    pub fn span(&self) -> f64 {
        self.t_max() - self.t_min()
    }
    /// Consecutive time differences, one fewer than the sample count.
    pub fn deltas(&self) -> Vec<f64> {
        self.times.windows(2).map(|w| w[1] - w[0]).collect()
    }
    /// Arithmetic mean and population variance of the values.
    pub fn value_moments(&self) -> (f64, f64) {
        let n = self.values.len() as f64;
        let mean = self.values.iter().sum::<f64>() / n;
        let variance = self
            .values
            .iter()
            .map(|v| {
                let delta = v - mean;
                delta * delta
            })
            .sum::<f64>()
            / n;
        (mean, variance)
    }
}
