use tracing::debug;

use crate::models::geometry::{CanvasGeometry, ScaleTransform};
use crate::models::series::CumulativeSeries;

/// Derives the pixel mapping for one render from series bounds and canvas size.
pub struct ScaleService;

impl ScaleService {
    pub fn new() -> Self {
        Self
    }

    /// Build the scale, or `None` when there is nothing to plot.
    ///
    /// Guards, each a named branch:
    /// - empty series → `None`
    /// - zero date range (one date only) → range floored to 1 day
    /// - max cumulative value <= 0 → `max_value = 1`, `y_scale = 1`, and
    ///   every value maps to the baseline
    pub fn build_scale(
        &self,
        series: &CumulativeSeries,
        geometry: &CanvasGeometry,
    ) -> Option<ScaleTransform> {
        let (first, last) = match (series.first_date(), series.last_date()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                debug!("empty series, no scale");
                return None;
            }
        };

        let raw_range = (last - first).num_days();
        let (date_range_days, range_floored) = Self::floor_date_range(raw_range);

        let true_max = series.max_cumulative().unwrap_or(0.0);
        let (max_value, y_scale, max_floored) = if true_max > 0.0 {
            (true_max, geometry.drawable_height() / true_max, false)
        } else {
            Self::zero_max_scale()
        };

        let x_scale = geometry.drawable_width() / date_range_days as f64;

        debug!(
            %first,
            date_range_days,
            range_floored,
            max_value,
            max_floored,
            x_scale,
            y_scale,
            "scale built"
        );

        Some(ScaleTransform {
            origin_date: first,
            date_range_days,
            max_value,
            x_scale,
            y_scale,
            range_floored,
            max_floored,
            geometry: *geometry,
        })
    }

    /// All events on one day would make the range 0 and `x_scale` infinite.
    fn floor_date_range(raw_days: i64) -> (i64, bool) {
        if raw_days < 1 {
            (1, true)
        } else {
            (raw_days, false)
        }
    }

    /// Sentinel scale used when no value is positive.
    fn zero_max_scale() -> (f64, f64, bool) {
        (1.0, 1.0, true)
    }
}

impl Default for ScaleService {
    fn default() -> Self {
        Self::new()
    }
}
