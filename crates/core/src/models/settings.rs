use serde::{Deserialize, Serialize};

use super::geometry::CanvasGeometry;
use crate::errors::CoreError;
use crate::render::Color;

/// Look of the two project charts.
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Canvas used when the caller does not pass one explicitly.
    pub geometry: CanvasGeometry,

    pub marker_radius: f64,

    /// Upper bound for modification bar width, in pixels
    pub max_bar_width: f64,

    /// Space kept between neighbouring bars
    pub bar_gap: f64,

    /// Vertical distance between a marker or bar top and its value label
    pub value_label_offset: f64,

    /// Vertical distance between the x-axis and description labels
    pub axis_label_offset: f64,

    /// Descriptions longer than this many characters are cut
    pub label_max_chars: usize,

    /// Appended to cut descriptions
    pub ellipsis: String,

    pub label_rotation_deg: f64,

    pub font_size_px: f64,

    pub axis_color: Color,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub payment_line_color: Color,
    pub modification_bar_fill: Color,
    pub modification_bar_outline: Color,
    pub modification_line_color: Color,

    pub payments_placeholder: String,
    pub modifications_placeholder: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            geometry: CanvasGeometry::default(),
            marker_radius: 3.0,
            max_bar_width: 30.0,
            bar_gap: 5.0,
            value_label_offset: 10.0,
            axis_label_offset: 10.0,
            label_max_chars: 20,
            ellipsis: "...".to_string(),
            label_rotation_deg: 45.0,
            font_size_px: 8.0,
            axis_color: Color::BLACK,
            text_color: Color::BLACK,
            placeholder_color: Color::GRAY,
            payment_line_color: Color::BLUE,
            modification_bar_fill: Color::LIGHT_BLUE,
            modification_bar_outline: Color::BLUE,
            modification_line_color: Color::RED,
            payments_placeholder: "No payment data".to_string(),
            modifications_placeholder: "No modification data".to_string(),
        }
    }
}

impl ChartSettings {
    /// Parse settings from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.geometry.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize chart settings: {e}")))
    }
}
