use serde::{Deserialize, Serialize};

use super::{Color, DrawingSurface, Point, TextStyle};

/// One primitive drawn onto a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Color,
    },
    Rect {
        corner_a: Point,
        corner_b: Point,
        fill: Color,
        outline: Color,
    },
    Text {
        text: String,
        at: Point,
        style: TextStyle,
    },
}

/// A surface that records draw operations as [`DrawCommand`]s.
///
/// Useful for tests and for hosts that replay or serialize the output
/// instead of painting directly.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clear_count: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// How many times `clear` was called.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect {
                corner_a, corner_b, ..
            } => Some((*corner_a, *corner_b)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, TextStyle)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, at, style } => Some((text.as_str(), *at, *style)),
            _ => None,
        })
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.clear_count += 1;
    }

    fn line(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn circle(&mut self, center: Point, radius: f64, fill: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
        });
    }

    fn rect(&mut self, corner_a: Point, corner_b: Point, fill: Color, outline: Color) {
        self.commands.push(DrawCommand::Rect {
            corner_a,
            corner_b,
            fill,
            outline,
        });
    }

    fn text(&mut self, text: &str, at: Point, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            style,
        });
    }
}
