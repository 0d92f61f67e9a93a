use tracing::debug;

use crate::errors::CoreError;
use crate::format::truncate_label;
use crate::models::project::{Modification, Payment};
use crate::models::series::{saturating_add, CumulativeSeries, MonetaryEvent, SeriesPoint};

/// Turns unordered dated amounts into a date-ordered cumulative series.
pub struct SeriesService {
    label_max_chars: usize,
    ellipsis: String,
}

impl SeriesService {
    /// Labels are cut at 20 characters and marked with "...".
    pub fn new() -> Self {
        Self::with_label_limit(20, "...")
    }

    pub fn with_label_limit(label_max_chars: usize, ellipsis: impl Into<String>) -> Self {
        Self {
            label_max_chars,
            ellipsis: ellipsis.into(),
        }
    }

    /// One event per completed payment, in record order.
    pub fn payment_events(&self, payments: &[Payment]) -> Vec<MonetaryEvent> {
        payments
            .iter()
            .filter(|p| p.is_completed())
            .map(|p| MonetaryEvent::new(p.date, p.amount))
            .collect()
    }

    /// One event per paid modification, dated at its start and labelled
    /// with its description.
    pub fn modification_events(&self, modifications: &[Modification]) -> Vec<MonetaryEvent> {
        modifications
            .iter()
            .filter(|m| m.is_paid)
            .map(|m| MonetaryEvent::with_label(m.start_date, m.cost, m.description.clone()))
            .collect()
    }

    /// Stable-sort events by date, then attach running totals.
    ///
    /// Events sharing a date are not merged: each keeps its input position
    /// among its peers and gets its own cumulative value. Labels, when
    /// present, are truncated. An empty slice gives an empty series.
    /// Totals that would overflow saturate at `±f64::MAX`.
    pub fn build_series(&self, events: &[MonetaryEvent]) -> Result<CumulativeSeries, CoreError> {
        if let Some((i, bad)) = events
            .iter()
            .enumerate()
            .find(|(_, e)| !e.amount.is_finite())
        {
            return Err(CoreError::non_finite(format!("events[{i}].amount"), bad.amount));
        }

        let mut ordered: Vec<&MonetaryEvent> = events.iter().collect();
        // `sort_by_key` is stable: ties keep their input order
        ordered.sort_by_key(|e| e.date);

        let mut running = 0.0;
        let points: Vec<SeriesPoint> = ordered
            .into_iter()
            .map(|event| {
                running = saturating_add(running, event.amount);
                SeriesPoint {
                    date: event.date,
                    raw_value: event.amount,
                    cumulative_value: running,
                    label: event
                        .label
                        .as_deref()
                        .map(|l| truncate_label(l, self.label_max_chars, &self.ellipsis)),
                }
            })
            .collect();

        debug!(
            events = events.len(),
            total = running,
            "cumulative series built"
        );

        CumulativeSeries::from_points(points)
    }

    pub fn payment_series(&self, payments: &[Payment]) -> Result<CumulativeSeries, CoreError> {
        self.build_series(&self.payment_events(payments))
    }

    pub fn modification_series(
        &self,
        modifications: &[Modification],
    ) -> Result<CumulativeSeries, CoreError> {
        self.build_series(&self.modification_events(modifications))
    }
}

impl Default for SeriesService {
    fn default() -> Self {
        Self::new()
    }
}
