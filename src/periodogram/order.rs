use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use crate::periodogram::PeriodogramError;
use crate::table::Table;
/// A single bin of the periodogram.
///
/// Only the frequency is stored; [`PeriodogramPoint::period`] is derived on
/// demand so the two can never drift apart. Serialized output still carries
/// `period` alongside `frequency` and `power`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodogramPoint {
    pub frequency: f64,
    pub power: f64,
}
impl PeriodogramPoint {
    pub fn new(frequency: f64, power: f64) -> Self {
        Self { frequency, power }
    }
    pub fn period(&self) -> f64 {
        1.0 / self.frequency
    }
}
impl Serialize for PeriodogramPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PeriodogramPoint", 3)?;
        state.serialize_field("frequency", &self.frequency)?;
        state.serialize_field("period", &self.period())?;
        state.serialize_field("power", &self.power)?;
        state.end()
    }
}
/// Sort key for the final rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    /// Ascending frequency.
    Frequency,
    /// Ascending period, i.e. descending frequency.
    #[default]
    Period,
}
impl OutputOrder {
    pub fn from_freq_order(freq_order: bool) -> Self {
        if freq_order {
            OutputOrder::Frequency
        } else {
            OutputOrder::Period
        }
    }
    /// Column name used for the sort key in tabular output.
    pub fn key_column(&self) -> &'static str {
        match self {
            OutputOrder::Frequency => "freq",
            OutputOrder::Period => "period",
        }
    }
}
/// Ordered periodogram produced once per invocation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodogramResult {
    points: Vec<PeriodogramPoint>,
    order: OutputOrder,
}
impl PeriodogramResult {
    pub fn points(&self) -> &[PeriodogramPoint] {
        &self.points
    }
    pub fn order(&self) -> OutputOrder {
        self.order
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn frequencies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.frequency).collect()
    }
    pub fn periods(&self) -> Vec<f64> {
        self.points.iter().map(PeriodogramPoint::period).collect()
    }
    pub fn powers(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.power).collect()
    }
    /// Highest-power point; the lowest frequency wins ties.
    pub fn peak(&self) -> Option<PeriodogramPoint> {
        self.points.iter().copied().reduce(|best, p| {
            if p.power > best.power
                || (p.power == best.power && p.frequency < best.frequency)
            {
                p
            } else {
                best
            }
        })
    }
    /// Key column (`freq` or `period`) followed by `power`, or both keys
    /// when `include_both` is set.
    pub fn to_table(&self, include_both: bool) -> Result<Table, PeriodogramError> {
        let (key, other) = match self.order {
            OutputOrder::Frequency => (self.frequencies(), self.periods()),
            OutputOrder::Period => (self.periods(), self.frequencies()),
        };
        let mut columns = vec![(self.order.key_column().to_string(), key)];
        if include_both {
            let other_name = match self.order {
                OutputOrder::Frequency => OutputOrder::Period.key_column(),
                OutputOrder::Period => OutputOrder::Frequency.key_column(),
            };
            columns.push((other_name.to_string(), other));
        }
        columns.push(("power".to_string(), self.powers()));
        Table::new(columns)
    }
}
/// Stable sort of grid-ordered points into the caller's preferred order.
pub struct ResultOrderer;
impl ResultOrderer {
    pub fn order(mut points: Vec<PeriodogramPoint>, order: OutputOrder) -> PeriodogramResult {
        match order {
            OutputOrder::Frequency => points.sort_by(|a, b| a.frequency.total_cmp(&b.frequency)),
            OutputOrder::Period => points.sort_by(|a, b| a.period().total_cmp(&b.period())),
        }
        PeriodogramResult { points, order }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn grid_points() -> Vec<PeriodogramPoint> {
        vec![
            PeriodogramPoint::new(0.25, 2.5),
            PeriodogramPoint::new(0.5, 0.0),
            PeriodogramPoint::new(0.375, 0.8),
        ]
    }
    #[test]
    fn frequency_order_is_ascending() {
        let result = ResultOrderer::order(grid_points(), OutputOrder::Frequency);
        assert_eq!(result.frequencies(), vec![0.25, 0.375, 0.5]);
    }
    #[test]
    fn period_order_is_descending_frequency() {
        let result = ResultOrderer::order(grid_points(), OutputOrder::Period);
        assert_eq!(result.periods(), vec![2.0, 1.0 / 0.375, 4.0]);
        assert_eq!(result.len(), 3);
    }
    #[test]
    fn equal_keys_keep_grid_order() {
        let points = vec![
            PeriodogramPoint::new(0.5, 1.0),
            PeriodogramPoint::new(0.5, 2.0),
            PeriodogramPoint::new(0.25, 3.0),
        ];
        let result = ResultOrderer::order(points, OutputOrder::Frequency);
        assert_eq!(result.powers(), vec![3.0, 1.0, 2.0]);
        let result = ResultOrderer::order(result.points().to_vec(), OutputOrder::Period);
        assert_eq!(result.powers(), vec![1.0, 2.0, 3.0]);
    }
    #[test]
    fn peak_prefers_lowest_frequency_on_ties() {
        let points = vec![
            PeriodogramPoint::new(0.5, 2.0),
            PeriodogramPoint::new(0.25, 2.0),
            PeriodogramPoint::new(0.4, 1.0),
        ];
        let result = ResultOrderer::order(points, OutputOrder::Period);
        assert_eq!(result.peak().map(|p| p.frequency), Some(0.25));
    }
    #[test]
    fn table_columns_follow_order() {
        let by_period = ResultOrderer::order(grid_points(), OutputOrder::Period);
        let table = by_period.to_table(false).unwrap();
        assert_eq!(table.column_names(), vec!["period", "power"]);
        let by_freq = ResultOrderer::order(grid_points(), OutputOrder::Frequency);
        let table = by_freq.to_table(true).unwrap();
        assert_eq!(table.column_names(), vec!["freq", "period", "power"]);
        assert_eq!(table.column("power").unwrap(), &[2.5, 0.8, 0.0]);
    }
    #[test]
    fn serialized_points_carry_period() {
        let json = serde_json::to_string(&PeriodogramPoint::new(0.25, 2.5)).unwrap();
        assert_eq!(json, r#"{"frequency":0.25,"period":4.0,"power":2.5}"#);
        let result = ResultOrderer::order(grid_points(), OutputOrder::Period);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["points"][2]["period"], 4.0);
        assert_eq!(value["order"], "period");
    }
    #[test]
    fn freq_order_flag_maps_to_order() {
        assert_eq!(OutputOrder::from_freq_order(true), OutputOrder::Frequency);
        assert_eq!(OutputOrder::from_freq_order(false), OutputOrder::default());
    }
}
