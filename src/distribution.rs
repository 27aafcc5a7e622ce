//! Random sample tables for the common probability distributions.
//!
//! Each variant carries its own typed parameters and explicit defaults, and a
//! single exhaustive `match` turns the variant into a sampler.
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Beta, Binomial, Distribution, Gamma, Normal, Poisson};
use crate::periodogram::PeriodogramError;
use crate::table::Table;
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SamplingDistribution {
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std_dev: f64 },
    Binomial { trials: u64, probability: f64 },
    Beta { alpha: f64, beta: f64 },
    /// Shape/rate parameterization; the sampler uses `scale = 1 / rate`.
    Gamma { shape: f64, rate: f64 },
    Poisson { lambda: f64 },
}
impl Default for SamplingDistribution {
    fn default() -> Self {
        SamplingDistribution::uniform()
    }
}
impl SamplingDistribution {
    pub fn uniform() -> Self {
        SamplingDistribution::Uniform {
            low: 0.0,
            high: 1.0,
        }
    }
    pub fn normal() -> Self {
        SamplingDistribution::Normal {
            mean: 0.0,
            std_dev: 1.0,
        }
    }
    pub fn binomial() -> Self {
        SamplingDistribution::Binomial {
            trials: 10,
            probability: 0.5,
        }
    }
    pub fn beta() -> Self {
        SamplingDistribution::Beta {
            alpha: 2.0,
            beta: 2.0,
        }
    }
    pub fn gamma() -> Self {
        SamplingDistribution::Gamma {
            shape: 2.0,
            rate: 2.0,
        }
    }
    pub fn poisson() -> Self {
        SamplingDistribution::Poisson { lambda: 1.0 }
    }
    pub fn name(&self) -> &'static str {
        match self {
            SamplingDistribution::Uniform { .. } => "uniform",
            SamplingDistribution::Normal { .. } => "normal",
            SamplingDistribution::Binomial { .. } => "binomial",
            SamplingDistribution::Beta { .. } => "beta",
            SamplingDistribution::Gamma { .. } => "gamma",
            SamplingDistribution::Poisson { .. } => "poisson",
        }
    }
    /// `rows x columns` draws, filled row by row, in columns `c0..c{columns-1}`.
    pub fn sample_table<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        rows: usize,
        columns: usize,
    ) -> Result<Table, PeriodogramError> {
        let shape = (rows, columns);
        let data = match *self {
            SamplingDistribution::Uniform { low, high } => {
                // `Uniform::new` panics when the width overflows.
                if !(low < high && (high - low).is_finite()) {
                    return Err(PeriodogramError::Distribution(format!(
                        "uniform range [{low}, {high}) is empty or its width is not finite"
                    )));
                }
                draw(rng, Uniform::new(low, high), shape, |v: f64| v)
            }
            SamplingDistribution::Normal { mean, std_dev } => {
                if !(mean.is_finite() && std_dev.is_finite() && std_dev >= 0.0) {
                    return Err(PeriodogramError::Distribution(format!(
                        "normal needs a finite mean and a finite, non-negative std_dev, got {mean} and {std_dev}"
                    )));
                }
                draw(rng, Normal::new(mean, std_dev).map_err(invalid)?, shape, |v: f64| v)
            }
            SamplingDistribution::Binomial {
                trials,
                probability,
            } => draw(
                rng,
                Binomial::new(trials, probability).map_err(invalid)?,
                shape,
                |v: u64| v as f64,
            ),
            SamplingDistribution::Beta { alpha, beta } => {
                draw(rng, Beta::new(alpha, beta).map_err(invalid)?, shape, |v: f64| v)
            }
            SamplingDistribution::Gamma { shape: k, rate } => {
                if rate.is_nan() || rate <= 0.0 {
                    return Err(PeriodogramError::Distribution(format!(
                        "gamma rate must be positive, got {rate}"
                    )));
                }
                draw(rng, Gamma::new(k, 1.0 / rate).map_err(invalid)?, shape, |v: f64| v)
            }
            SamplingDistribution::Poisson { lambda } => {
                draw(rng, Poisson::new(lambda).map_err(invalid)?, shape, |v: f64| v)
            }
        };
        let named = data
            .into_iter()
            .enumerate()
            .map(|(c, values)| (format!("c{c}"), values))
            .collect();
        Table::new(named)
    }
}
fn invalid(err: impl std::fmt::Display) -> PeriodogramError {
    PeriodogramError::Distribution(err.to_string())
}
fn draw<R, T, D>(
    rng: &mut R,
    dist: D,
    (rows, columns): (usize, usize),
    to_f64: fn(T) -> f64,
) -> Vec<Vec<f64>>
where
    R: Rng + ?Sized,
    D: Distribution<T>,
{
    let mut out = vec![Vec::with_capacity(rows); columns];
    for _ in 0..rows {
        for column in out.iter_mut() {
            column.push(to_f64(dist.sample(&mut *rng)));
        }
    }
    out
}
