use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::format::format_amount;
use crate::models::geometry::{CanvasGeometry, ScaleTransform};
use crate::models::project::Project;
use crate::models::series::CumulativeSeries;
use crate::models::settings::ChartSettings;
use crate::render::{Color, DrawingSurface, Point, TextAnchor, TextStyle};
use crate::services::scale_service::ScaleService;
use crate::services::series_service::SeriesService;

/// Bars never shrink below one pixel, however crowded the chart.
/// `space_per_point - bar_gap` alone goes negative past ~112 points on a
/// 560 px plot and would draw inverted rectangles.
const MIN_BAR_WIDTH: f64 = 1.0;

/// Draws the payment and modification charts onto a [`DrawingSurface`].
///
/// Every render is a full redraw:
/// clear → (empty: placeholder) | (axes → points in date order).
/// Nothing is cached between calls.
pub struct ChartService {
    settings: ChartSettings,
    series_service: SeriesService,
    scale_service: ScaleService,
}

impl ChartService {
    pub fn new() -> Self {
        Self::with_settings(ChartSettings::default())
    }

    pub fn with_settings(settings: ChartSettings) -> Self {
        let series_service =
            SeriesService::with_label_limit(settings.label_max_chars, settings.ellipsis.clone());
        Self {
            settings,
            series_service,
            scale_service: ScaleService::new(),
        }
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn series_service(&self) -> &SeriesService {
        &self.series_service
    }

    pub fn scale_service(&self) -> &ScaleService {
        &self.scale_service
    }

    // ── Project-level entry points ──────────────────────────────────

    /// Cumulative completed payments as a line chart.
    pub fn render_payments_chart<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        project: &Project,
        geometry: &CanvasGeometry,
    ) -> Result<(), CoreError> {
        let series = self.series_service.payment_series(&project.payments)?;
        debug!(project = %project.id, points = series.len(), "rendering payments chart");
        self.draw_line_chart(surface, &series, geometry)
    }

    /// Paid modifications as bars with a cumulative cost line on top.
    pub fn render_modifications_chart<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        project: &Project,
        geometry: &CanvasGeometry,
    ) -> Result<(), CoreError> {
        let series = self
            .series_service
            .modification_series(&project.modifications)?;
        debug!(project = %project.id, points = series.len(), "rendering modifications chart");
        self.draw_bar_line_chart(surface, &series, geometry)
    }

    // ── Series-level drawing ────────────────────────────────────────

    /// Markers joined by straight segments, each labelled with its
    /// cumulative value.
    pub fn draw_line_chart<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        series: &CumulativeSeries,
        geometry: &CanvasGeometry,
    ) -> Result<(), CoreError> {
        let Some(scale) =
            self.prepare(surface, series, geometry, &self.settings.payments_placeholder)?
        else {
            return Ok(());
        };

        let color = self.settings.payment_line_color;
        let mut previous: Option<Point> = None;
        for point in series.points() {
            let at = scale.map(point.date, point.cumulative_value);
            self.draw_marker(surface, at, previous, color);
            surface.text(
                &format_amount(point.cumulative_value),
                Point::new(at.x, at.y - self.settings.value_label_offset),
                self.label_style(),
            );
            previous = Some(at);
        }
        Ok(())
    }

    /// Per point: a bar for the raw value, a marker on the cumulative line,
    /// and the description written at 45° under the x-axis.
    pub fn draw_bar_line_chart<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        series: &CumulativeSeries,
        geometry: &CanvasGeometry,
    ) -> Result<(), CoreError> {
        let Some(scale) = self.prepare(
            surface,
            series,
            geometry,
            &self.settings.modifications_placeholder,
        )?
        else {
            return Ok(());
        };

        let bar_width = self.bar_width(&scale, series.len());
        let baseline = geometry.baseline_y();
        let description_style = TextStyle {
            color: self.settings.text_color,
            font_size_px: self.settings.font_size_px,
            anchor: TextAnchor::West,
            rotation_deg: self.settings.label_rotation_deg,
        };

        let mut previous: Option<Point> = None;
        for point in series.points() {
            let x = scale.map_x(point.date);
            let bar_top = scale.map_y(point.raw_value);

            surface.rect(
                Point::new(x - bar_width / 2.0, baseline),
                Point::new(x + bar_width / 2.0, bar_top),
                self.settings.modification_bar_fill,
                self.settings.modification_bar_outline,
            );

            let at = Point::new(x, scale.map_y(point.cumulative_value));
            self.draw_marker(surface, at, previous, self.settings.modification_line_color);
            previous = Some(at);

            surface.text(
                &format_amount(point.raw_value),
                Point::new(x, bar_top - self.settings.value_label_offset),
                self.label_style(),
            );

            if let Some(label) = &point.label {
                surface.text(
                    label,
                    Point::new(x, baseline + self.settings.axis_label_offset),
                    description_style,
                );
            }
        }
        Ok(())
    }

    /// Bar width for `point_count` bars sharing the plot width.
    ///
    /// `min(max_bar_width, space_per_point - bar_gap)`, with zero or one
    /// point getting the full `max_bar_width`.
    pub fn bar_width(&self, scale: &ScaleTransform, point_count: usize) -> f64 {
        if point_count <= 1 {
            return self.settings.max_bar_width;
        }
        let space_per_point = scale.x_scale * scale.date_range_days as f64 / point_count as f64;
        (space_per_point - self.settings.bar_gap)
            .min(self.settings.max_bar_width)
            .max(MIN_BAR_WIDTH)
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Shared opening of both charts. Clears the surface, then either
    /// writes the placeholder (empty series) or draws the axes.
    /// Returns the scale only when there is room to plot points.
    fn prepare<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        series: &CumulativeSeries,
        geometry: &CanvasGeometry,
        placeholder: &str,
    ) -> Result<Option<ScaleTransform>, CoreError> {
        geometry.validate()?;
        surface.clear();

        let Some(scale) = self.scale_service.build_scale(series, geometry) else {
            surface.text(
                placeholder,
                geometry.center(),
                TextStyle::centered(self.settings.placeholder_color, self.settings.font_size_px),
            );
            return Ok(None);
        };

        self.draw_axes(surface, geometry);

        if geometry.is_degenerate() {
            warn!(
                width = geometry.width,
                height = geometry.height,
                padding = geometry.padding,
                "no drawable area inside padding, only axes drawn"
            );
            return Ok(None);
        }
        Ok(Some(scale))
    }

    fn draw_axes<S: DrawingSurface + ?Sized>(&self, surface: &mut S, geometry: &CanvasGeometry) {
        let pad = geometry.padding;
        let baseline = geometry.baseline_y();
        let color = self.settings.axis_color;
        surface.line(
            Point::new(pad, baseline),
            Point::new(geometry.width - pad, baseline),
            color,
        );
        surface.line(Point::new(pad, pad), Point::new(pad, baseline), color);
    }

    /// Marker at `at`, plus a segment from the previous marker if any.
    fn draw_marker<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        at: Point,
        previous: Option<Point>,
        color: Color,
    ) {
        debug_assert!(at.is_finite(), "marker mapped off the finite plane: {at:?}");
        surface.circle(at, self.settings.marker_radius, color);
        if let Some(prev) = previous {
            surface.line(prev, at, color);
        }
    }

    fn label_style(&self) -> TextStyle {
        TextStyle::centered(self.settings.text_color, self.settings.font_size_px)
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
