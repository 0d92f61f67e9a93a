//! Drawing-surface abstraction used by the chart renderer.
//!
//! A host toolkit implements [`DrawingSurface`] on top of its native canvas
//! (Tk, GTK/Cairo, an HTML canvas, ...). The chart code only ever talks to
//! this trait, so it runs and is tested without any GUI.

mod primitives;
mod recording;

pub use primitives::{Color, Point, TextAnchor, TextStyle};
pub use recording::{DrawCommand, RecordingSurface};

/// Primitive drawing operations a chart needs.
///
/// A surface is owned by one render call at a time. Renders always start
/// with `clear`, so implementations never need to diff.
pub trait DrawingSurface {
    /// Drop everything drawn so far.
    fn clear(&mut self);

    fn line(&mut self, from: Point, to: Point, color: Color);

    /// Filled circle with a solid outline of the same color.
    fn circle(&mut self, center: Point, radius: f64, fill: Color);

    /// Axis-aligned rectangle between two opposite corners.
    fn rect(&mut self, corner_a: Point, corner_b: Point, fill: Color, outline: Color);

    fn text(&mut self, text: &str, at: Point, style: TextStyle);
}
