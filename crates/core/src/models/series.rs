use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A dated amount of money feeding one of the charts.
///
/// Built from completed payments (amount) or paid modifications (cost,
/// with the description carried as `label`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonetaryEvent {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl MonetaryEvent {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            amount,
            label: None,
        }
    }

    pub fn with_label(date: NaiveDate, amount: f64, label: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            label: Some(label.into()),
        }
    }
}

/// One point of a cumulative series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,

    /// The event's own amount
    pub raw_value: f64,

    /// Prefix sum of `raw_value` up to and including this point
    pub cumulative_value: f64,

    /// Display label, already truncated
    #[serde(default)]
    pub label: Option<String>,
}

/// Date-ordered points with running totals.
///
/// Invariants, checked on every construction path:
/// - dates are non-decreasing
/// - `cumulative[0] == raw[0]`, `cumulative[i] == cumulative[i-1] + raw[i]`
/// - every value is finite; running totals saturate at `±f64::MAX`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<SeriesPoint>", into = "Vec<SeriesPoint>")]
pub struct CumulativeSeries {
    points: Vec<SeriesPoint>,
}

impl CumulativeSeries {
    /// An empty series. Charts render their placeholder for it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series from precomputed points, rejecting anything that
    /// breaks the ordering or prefix-sum invariants.
    pub fn from_points(points: Vec<SeriesPoint>) -> Result<Self, CoreError> {
        let mut previous: Option<&SeriesPoint> = None;
        for (i, point) in points.iter().enumerate() {
            if !point.raw_value.is_finite() {
                return Err(CoreError::non_finite(
                    format!("series[{i}].raw_value"),
                    point.raw_value,
                ));
            }
            if !point.cumulative_value.is_finite() {
                return Err(CoreError::non_finite(
                    format!("series[{i}].cumulative_value"),
                    point.cumulative_value,
                ));
            }

            let expected = match previous {
                Some(prev) => {
                    if point.date < prev.date {
                        return Err(CoreError::MalformedSeries(format!(
                            "point {i} dated {} precedes point {} dated {}",
                            point.date,
                            i - 1,
                            prev.date
                        )));
                    }
                    saturating_add(prev.cumulative_value, point.raw_value)
                }
                None => point.raw_value,
            };

            if !approx_eq(expected, point.cumulative_value) {
                return Err(CoreError::MalformedSeries(format!(
                    "point {i} has cumulative value {} but the running sum is {expected}",
                    point.cumulative_value
                )));
            }
            previous = Some(point);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Largest cumulative value, `None` for an empty series.
    pub fn max_cumulative(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.cumulative_value)
            .reduce(f64::max)
    }

    /// Cumulative value of the last point (the running total), 0 when empty.
    pub fn total(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.cumulative_value)
    }
}

impl TryFrom<Vec<SeriesPoint>> for CumulativeSeries {
    type Error = CoreError;

    fn try_from(points: Vec<SeriesPoint>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl From<CumulativeSeries> for Vec<SeriesPoint> {
    fn from(series: CumulativeSeries) -> Self {
        series.points
    }
}

/// Running-sum step. Finite amounts whose sum overflows stay at `±f64::MAX`.
pub fn saturating_add(total: f64, amount: f64) -> f64 {
    (total + amount).clamp(f64::MIN, f64::MAX)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
