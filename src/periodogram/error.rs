use thiserror::Error;
/// Coarse classification of a [`PeriodogramError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    Validation,
    InsufficientData,
}
#[derive(Debug, Error)]
pub enum PeriodogramError {
    #[error("time and value lengths differ: {times} times, {values} values")]
    LengthMismatch { times: usize, values: usize },
    #[error("need at least 2 samples, got {actual}")]
    TooFewSamples { actual: usize },
    #[error("time at index {index} is not finite ({value})")]
    NonFiniteTime { index: usize, value: f64 },
    #[error("value at index {index} is not finite ({value})")]
    NonFiniteValue { index: usize, value: f64 },
    #[error("times must be strictly increasing: t[{index}] = {current} follows {previous}")]
    NonMonotonicTime {
        index: usize,
        previous: f64,
        current: f64,
    },
    #[error("column `{name}` not found")]
    MissingColumn { name: String },
    #[error("column `{name}` has {actual} rows, expected {expected}")]
    RaggedColumn {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate column name `{name}`")]
    DuplicateColumn { name: String },
    #[error("oversampling exponent must be non-negative, got {0}")]
    NegativeExponent(i32),
    #[error("grid of {requested} points exceeds the budget of {budget}")]
    GridBudgetExceeded { requested: usize, budget: usize },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid distribution parameters: {0}")]
    Distribution(String),
    #[error("frequency range is undefined: {0}")]
    InsufficientData(String),
}
impl PeriodogramError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PeriodogramError::LengthMismatch { .. }
            | PeriodogramError::TooFewSamples { .. }
            | PeriodogramError::NonFiniteTime { .. }
            | PeriodogramError::NonFiniteValue { .. }
            | PeriodogramError::NonMonotonicTime { .. }
            | PeriodogramError::MissingColumn { .. }
            | PeriodogramError::RaggedColumn { .. }
            | PeriodogramError::DuplicateColumn { .. } => ErrorKind::MalformedInput,
            PeriodogramError::NegativeExponent(_)
            | PeriodogramError::GridBudgetExceeded { .. }
            | PeriodogramError::Config(_)
            | PeriodogramError::Distribution(_) => ErrorKind::Validation,
            PeriodogramError::InsufficientData(_) => ErrorKind::InsufficientData,
        }
    }
}
impl From<serde_json::Error> for PeriodogramError {
    fn from(value: serde_json::Error) -> Self {
        PeriodogramError::Config(value.to_string())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn kinds_follow_taxonomy() {
        let malformed = PeriodogramError::NonMonotonicTime {
            index: 2,
            previous: 1.0,
            current: 1.0,
        };
        assert_eq!(malformed.kind(), ErrorKind::MalformedInput);
        assert_eq!(
            PeriodogramError::NegativeExponent(-1).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            PeriodogramError::InsufficientData("zero span".into()).kind(),
            ErrorKind::InsufficientData
        );
    }
    #[test]
    fn json_errors_become_config_errors() {
        let err: PeriodogramError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
