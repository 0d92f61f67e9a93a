use serde::{Deserialize, Serialize};

/// A position in pixel space. Origin is the top-left corner, y grows down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const LIGHT_BLUE: Self = Self::rgb(0.678, 0.847, 0.902);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }
}

/// Which point of the text box sits on the anchor coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    /// Horizontally and vertically centered
    Center,
    /// Left edge, vertically centered
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    pub font_size_px: f64,
    pub anchor: TextAnchor,
    /// Counter-clockwise rotation around the anchor, in degrees
    pub rotation_deg: f64,
}

impl TextStyle {
    #[must_use]
    pub const fn centered(color: Color, font_size_px: f64) -> Self {
        Self {
            color,
            font_size_px,
            anchor: TextAnchor::Center,
            rotation_deg: 0.0,
        }
    }
}
