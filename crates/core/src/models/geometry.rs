use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::render::Point;

/// Size of the drawing surface and the blank margin kept on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl CanvasGeometry {
    /// Create a geometry, rejecting negative or non-finite dimensions.
    pub fn new(width: f64, height: f64, padding: f64) -> Result<Self, CoreError> {
        let geometry = Self {
            width,
            height,
            padding,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
        ] {
            if !value.is_finite() {
                return Err(CoreError::non_finite(format!("geometry.{field}"), value));
            }
            if value < 0.0 {
                return Err(CoreError::InvalidGeometry(format!(
                    "{field} must be >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Plot width inside the padding, never negative.
    pub fn drawable_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    /// Plot height inside the padding, never negative.
    pub fn drawable_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// True when padding leaves no room for data.
    pub fn is_degenerate(&self) -> bool {
        self.drawable_width() <= 0.0 || self.drawable_height() <= 0.0
    }

    /// Pixel y of the x-axis.
    pub fn baseline_y(&self) -> f64 {
        self.height - self.padding
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 160.0,
            padding: 20.0,
        }
    }
}

/// Affine mapping from (date, value) to pixel space for a single render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTransform {
    /// Date mapped to the y-axis (`x = padding`)
    pub origin_date: NaiveDate,

    /// Whole days between first and last point, at least 1
    pub date_range_days: i64,

    /// Largest cumulative value, or the sentinel 1 when that is <= 0
    pub max_value: f64,

    /// Pixels per day
    pub x_scale: f64,

    /// Pixels per unit of money
    pub y_scale: f64,

    /// All points shared one date and the range was raised to 1 day.
    pub range_floored: bool,

    /// No positive value existed; every value maps to the baseline.
    pub max_floored: bool,

    pub geometry: CanvasGeometry,
}

impl ScaleTransform {
    pub fn days_from_origin(&self, date: NaiveDate) -> i64 {
        (date - self.origin_date).num_days()
    }

    pub fn map_x(&self, date: NaiveDate) -> f64 {
        self.geometry.padding + self.days_from_origin(date) as f64 * self.x_scale
    }

    /// Larger values sit higher on screen (smaller pixel y).
    pub fn map_y(&self, value: f64) -> f64 {
        if self.max_floored {
            return self.geometry.baseline_y();
        }
        self.geometry.height - (self.geometry.padding + value * self.y_scale)
    }

    pub fn map(&self, date: NaiveDate, value: f64) -> Point {
        Point::new(self.map_x(date), self.map_y(value))
    }
}
