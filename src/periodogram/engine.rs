use std::f64::consts::PI;
use log::{debug, warn};
use rayon::prelude::*;
use crate::periodogram::{FrequencyGrid, PeriodogramPoint, SampleSet};
/// Basis sums at or below `n * DEGENERATE_BASIS_EPS` count as underflowed.
const DEGENERATE_BASIS_EPS: f64 = 1e-10;
/// Grid size above which bins are spread across the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;
/// Evaluates Lomb-Scargle power against the original, non-interpolated samples.
pub struct PeriodogramEngine<'a> {
    samples: &'a SampleSet,
    centered: Vec<f64>,
    variance: f64,
    parallel_threshold: usize,
}
impl<'a> PeriodogramEngine<'a> {
    pub fn new(samples: &'a SampleSet) -> Self {
        let (mean, variance) = samples.value_moments();
        let centered = samples.values().iter().map(|v| v - mean).collect();
        Self {
            samples,
            centered,
            variance,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
    /// One point per grid bin, in grid order.
    pub fn compute(&self, grid: &FrequencyGrid) -> Vec<PeriodogramPoint> {
        let frequencies = grid.frequencies();
        let mut power = vec![0.0; frequencies.len()];
        if self.variance > 0.0 && self.variance.is_finite() {
            let degenerate = if frequencies.len() > self.parallel_threshold {
                debug!("evaluating {} bins in parallel", frequencies.len());
                power
                    .par_iter_mut()
                    .zip(frequencies.par_iter())
                    .map(|(slot, &f)| fill_slot(slot, self.bin_power(f)))
                    .sum::<usize>()
            } else {
                power
                    .iter_mut()
                    .zip(frequencies)
                    .map(|(slot, &f)| fill_slot(slot, self.bin_power(f)))
                    .sum::<usize>()
            };
            if degenerate > 0 {
                warn!(
                    "{degenerate} of {} bins had a degenerate basis; reported as zero power",
                    frequencies.len()
                );
            }
        } else if self.variance == 0.0 {
            debug!("values have zero variance; all powers are 0");
        } else {
            warn!("value variance {} is not finite; all powers are 0", self.variance);
        }
        frequencies
            .iter()
            .zip(power)
            .map(|(&frequency, power)| PeriodogramPoint::new(frequency, power))
            .collect()
    }
    /// Normalized power at a single frequency.
    ///
    /// `P = [(Σ y c)² / Σ c² + (Σ y s)² / Σ s²] / (2 σ²)` with
    /// `c = cos ω(t - τ)`, `s = sin ω(t - τ)` and τ chosen so the two
    /// regressors are orthogonal. Degenerate bins report 0.
    pub fn power_at(&self, frequency: f64) -> f64 {
        self.bin_power(frequency).unwrap_or(0.0)
    }
    /// `None` when a basis sum underflows at this frequency.
    fn bin_power(&self, frequency: f64) -> Option<f64> {
        if !(self.variance > 0.0 && self.variance.is_finite()) || frequency <= 0.0 {
            return Some(0.0);
        }
        let times = self.samples.times();
        let omega = 2.0 * PI * frequency;
        let (sum_sin2, sum_cos2) = times.iter().fold((0.0, 0.0), |(s, c), &t| {
            let (sin, cos) = (2.0 * omega * t).sin_cos();
            (s + sin, c + cos)
        });
        let tau = sum_sin2.atan2(sum_cos2) / (2.0 * omega);
        let mut yc = 0.0;
        let mut ys = 0.0;
        let mut cc = 0.0;
        let mut ss = 0.0;
        for (&t, &y) in times.iter().zip(&self.centered) {
            let (s, c) = (omega * (t - tau)).sin_cos();
            yc += y * c;
            ys += y * s;
            cc += c * c;
            ss += s * s;
        }
        let floor = times.len() as f64 * DEGENERATE_BASIS_EPS;
        if cc <= floor || ss <= floor {
            return None;
        }
        let power = (yc * yc / cc + ys * ys / ss) / (2.0 * self.variance);
        Some(if power.is_finite() { power.max(0.0) } else { 0.0 })
    }
}
/// Writes the bin's power and returns 1 if it was degenerate.
fn fill_slot(slot: &mut f64, power: Option<f64>) -> usize {
    match power {
        Some(p) => {
            *slot = p;
            0
        }
        None => {
            *slot = 0.0;
            1
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::periodogram::FrequencyGridBuilder;
    fn unit_sine() -> SampleSet {
        SampleSet::from_slices(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 1.0, 0.0, -1.0, 0.0]).unwrap()
    }
    #[test]
    fn unit_sine_peaks_at_quarter_frequency() {
        let samples = unit_sine();
        let grid = FrequencyGridBuilder::with_budget(64).build(&samples).unwrap();
        let points = PeriodogramEngine::new(&samples).compute(&grid);
        assert_eq!(points.len(), 5);
        assert!((points[0].power - 2.5).abs() < 1e-9);
        assert!(points[1..].iter().all(|p| p.power < points[0].power));
    }
    #[test]
    fn degenerate_basis_reports_zero() {
        // At f = 0.5 every sin(ω(t - τ)) vanishes on integer times.
        let samples = unit_sine();
        assert_eq!(PeriodogramEngine::new(&samples).power_at(0.5), 0.0);
    }
    #[test]
    fn degenerate_bins_are_counted_once_per_grid() {
        let samples = unit_sine();
        let engine = PeriodogramEngine::new(&samples);
        assert_eq!(engine.bin_power(0.5), None);
        assert!(engine.bin_power(0.25).is_some());
        let mut slot = 7.0;
        assert_eq!(fill_slot(&mut slot, None), 1);
        assert_eq!(slot, 0.0);
        assert_eq!(fill_slot(&mut slot, Some(2.5)), 0);
        assert_eq!(slot, 2.5);
        let grid = FrequencyGridBuilder::with_budget(64).build(&samples).unwrap();
        let points = engine.compute(&grid);
        assert_eq!(points.iter().filter(|p| p.power == 0.0).count(), 1);
    }
    #[test]
    fn constant_values_give_zero_power_everywhere() {
        let samples = SampleSet::from_slices(&[0.0, 0.7, 1.1, 2.5, 4.0], &[3.0; 5]).unwrap();
        let grid = FrequencyGridBuilder::with_budget(64).build(&samples).unwrap();
        let points = PeriodogramEngine::new(&samples).compute(&grid);
        assert!(points.iter().all(|p| p.power == 0.0));
    }
    #[test]
    fn parallel_and_sequential_paths_agree() {
        let times: Vec<f64> = (0..600).map(|i| i as f64 * 0.37 + (i % 7) as f64 * 0.05).collect();
        let values: Vec<f64> = times.iter().map(|t| (2.0 * PI * 0.11 * t).sin() + 0.1 * t.cos()).collect();
        let samples = SampleSet::new(times, values).unwrap();
        let grid = FrequencyGridBuilder::with_budget(4096).build(&samples).unwrap();
        let sequential = PeriodogramEngine::new(&samples)
            .with_parallel_threshold(usize::MAX)
            .compute(&grid);
        let parallel = PeriodogramEngine::new(&samples)
            .with_parallel_threshold(0)
            .compute(&grid);
        assert_eq!(sequential, parallel);
    }
    #[test]
    fn power_is_shift_invariant() {
        let samples = unit_sine();
        let shifted: Vec<f64> = samples.times().iter().map(|t| t + 1000.0).collect();
        let shifted = SampleSet::from_slices(&shifted, samples.values()).unwrap();
        let a = PeriodogramEngine::new(&samples).power_at(0.3);
        let b = PeriodogramEngine::new(&shifted).power_at(0.3);
        assert!((a - b).abs() < 1e-6);
    }
}
