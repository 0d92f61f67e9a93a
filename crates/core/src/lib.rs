pub mod errors;
pub mod format;
pub mod models;
pub mod render;
pub mod services;
pub mod telemetry;

use models::{
    balance::BalanceSnapshot,
    geometry::{CanvasGeometry, ScaleTransform},
    project::Project,
    series::CumulativeSeries,
    settings::ChartSettings,
};
use render::DrawingSurface;
use services::{balance_service::BalanceService, chart_service::ChartService};

use errors::CoreError;

// ── Free functions for UI hosts ─────────────────────────────────────

/// Compute the balance snapshot of `project`.
#[must_use]
pub fn calculate_balance(project: &Project) -> BalanceSnapshot {
    BalanceService::new().calculate_balance(project)
}

/// Draw the cumulative payments chart with default chart settings.
///
/// Never fails for finite records, including none at all; errors only
/// on non-finite amounts or invalid geometry.
pub fn render_payments_chart<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    project: &Project,
    geometry: &CanvasGeometry,
) -> Result<(), CoreError> {
    ChartService::new().render_payments_chart(surface, project, geometry)
}

/// Draw the modifications bar+line chart with default chart settings.
pub fn render_modifications_chart<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    project: &Project,
    geometry: &CanvasGeometry,
) -> Result<(), CoreError> {
    ChartService::new().render_modifications_chart(surface, project, geometry)
}

/// Main entry point for a single project's financial views.
/// Holds the project records, chart settings, and the services that
/// derive the balance and charts from them.
///
/// Nothing derived is stored: every call recomputes from the current
/// records, so a view refresh after `replace_project` is always current.
#[must_use]
pub struct ProjectLedger {
    project: Project,
    balance_service: BalanceService,
    chart_service: ChartService,
}

impl std::fmt::Debug for ProjectLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectLedger")
            .field("project", &self.project.id)
            .field("payments", &self.project.payments.len())
            .field("modifications", &self.project.modifications.len())
            .field("settings", self.chart_service.settings())
            .finish()
    }
}

impl ProjectLedger {
    /// Wrap a project with default chart settings.
    pub fn new(project: Project) -> Self {
        Self::with_settings(project, ChartSettings::default())
    }

    pub fn with_settings(project: Project, settings: ChartSettings) -> Self {
        Self {
            project,
            balance_service: BalanceService::new(),
            chart_service: ChartService::with_settings(settings),
        }
    }

    /// Load a project from its JSON export.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let project: Project = serde_json::from_str(json)?;
        Ok(Self::new(project))
    }

    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Swap in a freshly loaded record set (e.g. after a payment was added).
    pub fn replace_project(&mut self, project: Project) {
        self.project = project;
    }

    #[must_use]
    pub fn settings(&self) -> &ChartSettings {
        self.chart_service.settings()
    }

    pub fn set_settings(&mut self, settings: ChartSettings) {
        self.chart_service = ChartService::with_settings(settings);
    }

    // ── Balance ─────────────────────────────────────────────────────

    #[must_use]
    pub fn calculate_balance(&self) -> BalanceSnapshot {
        self.balance_service.calculate_balance(&self.project)
    }

    // ── Series & Scales ─────────────────────────────────────────────

    pub fn payment_series(&self) -> Result<CumulativeSeries, CoreError> {
        self.chart_service
            .series_service()
            .payment_series(&self.project.payments)
    }

    pub fn modification_series(&self) -> Result<CumulativeSeries, CoreError> {
        self.chart_service
            .series_service()
            .modification_series(&self.project.modifications)
    }

    /// Scale of the payments chart on the configured canvas, `None` without data.
    pub fn payment_scale(&self) -> Result<Option<ScaleTransform>, CoreError> {
        let series = self.payment_series()?;
        Ok(self.scale_for(&series))
    }

    /// Scale of the modifications chart on the configured canvas, `None` without data.
    pub fn modification_scale(&self) -> Result<Option<ScaleTransform>, CoreError> {
        let series = self.modification_series()?;
        Ok(self.scale_for(&series))
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Draw the payments chart on the configured canvas geometry.
    pub fn render_payments_chart<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<(), CoreError> {
        let geometry = self.settings().geometry;
        self.chart_service
            .render_payments_chart(surface, &self.project, &geometry)
    }

    /// Draw the modifications chart on the configured canvas geometry.
    pub fn render_modifications_chart<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<(), CoreError> {
        let geometry = self.settings().geometry;
        self.chart_service
            .render_modifications_chart(surface, &self.project, &geometry)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Balance snapshot as pretty JSON, for hosts that display it elsewhere.
    pub fn balance_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.calculate_balance())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize balance: {e}")))
    }

    /// Both series as pretty JSON: `{ "payments": [...], "modifications": [...] }`.
    pub fn series_to_json(&self) -> Result<String, CoreError> {
        let payload = serde_json::json!({
            "payments": self.payment_series()?,
            "modifications": self.modification_series()?,
        });
        serde_json::to_string_pretty(&payload)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize series: {e}")))
    }

    /// The whole project record set as pretty JSON.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.project)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize project: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn scale_for(&self, series: &CumulativeSeries) -> Option<ScaleTransform> {
        self.chart_service
            .scale_service()
            .build_scale(series, &self.settings().geometry)
    }
}
