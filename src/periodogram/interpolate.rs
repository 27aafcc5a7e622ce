use std::borrow::Cow;
use log::debug;
use crate::periodogram::grid::linspace;
use crate::periodogram::{PeriodogramError, SampleSet};
/// Densifies an irregular series onto an even grid of `N * 2^k` points.
///
/// The result only feeds the frequency grid. Power is always evaluated
/// against the original samples.
#[derive(Clone, Copy, Debug)]
pub struct Interpolator {
    exponent: u32,
    max_points: usize,
}
impl Interpolator {
    pub fn new(exponent: i32, max_points: usize) -> Result<Self, PeriodogramError> {
        if exponent < 0 {
            return Err(PeriodogramError::NegativeExponent(exponent));
        }
        Ok(Self {
            exponent: exponent as u32,
            max_points,
        })
    }
    pub fn exponent(&self) -> u32 {
        self.exponent
    }
    /// Number of points the working sequence will have for `n` originals.
    pub fn working_len(&self, n: usize) -> Result<usize, PeriodogramError> {
        if self.exponent == 0 {
            return Ok(n);
        }
        let requested = 1usize
            .checked_shl(self.exponent)
            .and_then(|factor| n.checked_mul(factor))
            .unwrap_or(usize::MAX);
        if requested > self.max_points {
            return Err(PeriodogramError::GridBudgetExceeded {
                requested,
                budget: self.max_points,
            });
        }
        Ok(requested)
    }
    /// Identity for `k = 0`, otherwise a piecewise-linear resample over
    /// `[t_min, t_max]`.
    pub fn apply<'a>(&self, samples: &'a SampleSet) -> Result<Cow<'a, SampleSet>, PeriodogramError> {
        if self.exponent == 0 {
            return Ok(Cow::Borrowed(samples));
        }
        let len = self.working_len(samples.len())?;
        debug!(
            "interpolating {} samples by 2^{} to {len} points",
            samples.len(),
            self.exponent
        );
        let times = linspace(samples.t_min(), samples.t_max(), len);
        let values = times
            .iter()
            .map(|&t| linear_interp(samples.times(), samples.values(), t))
            .collect();
        Ok(Cow::Owned(SampleSet::new(times, values)?))
    }
}
/// Linear interpolation at `t`, clamped to the end values outside the knots.
fn linear_interp(knots: &[f64], values: &[f64], t: f64) -> f64 {
    let last = knots.len() - 1;
    if t <= knots[0] {
        return values[0];
    }
    if t >= knots[last] {
        return values[last];
    }
    // First knot strictly after t; always in 1..=last here.
    let idx = knots.partition_point(|&x| x <= t);
    let (t0, t1) = (knots[idx - 1], knots[idx]);
    let (y0, y1) = (values[idx - 1], values[idx]);
    y0 + (y1 - y0) * (t - t0) / (t1 - t0)
}
