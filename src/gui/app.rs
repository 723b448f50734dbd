//! Launchboard Main Application
//! Main window wiring the control panel to the two charts.

use egui::SidePanel;
use tracing::debug;

use crate::analysis::{aggregate_outcomes, correlate, SiteFilter};
use crate::data::LaunchTable;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};

/// Main application window.
///
/// The table is loaded once before the window opens and is read-only from
/// here on; every control change recomputes chart data synchronously within
/// the same frame.
pub struct DashboardApp {
    table: LaunchTable,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, table: LaunchTable) -> Self {
        let control_panel = ControlPanel::new(
            table.sites().to_vec(),
            table.payload_bounds(),
            table.len(),
        );

        let mut app = Self {
            table,
            control_panel,
            chart_viewer: ChartViewer::new(),
        };
        app.refresh_outcome_chart();
        app.refresh_scatter_chart();
        app
    }

    /// Recompute the proportion chart from the current site selection.
    fn refresh_outcome_chart(&mut self) {
        let site = self.control_panel.selection.site.clone();
        let slices = aggregate_outcomes(&self.table, &site);
        debug!(buckets = slices.len(), "outcome chart refreshed");

        self.chart_viewer.outcome_title = match &site {
            SiteFilter::All => "Total Successful Launches by Site".to_owned(),
            SiteFilter::Site(name) => format!("Launch Outcomes for {name}"),
        };
        self.chart_viewer.outcome_slices = slices;
    }

    /// Recompute the scatter chart from the current site and payload range.
    fn refresh_scatter_chart(&mut self) {
        let selection = self.control_panel.selection.clone();
        let points = correlate(
            &self.table,
            &selection.site,
            selection.payload_low,
            selection.payload_high,
        );
        debug!(points = points.len(), "scatter chart refreshed");

        self.chart_viewer.scatter_title = match &selection.site {
            SiteFilter::All => "Payload vs. Outcome for All Sites".to_owned(),
            SiteFilter::Site(name) => format!("Payload vs. Outcome for {name}"),
        };
        self.chart_viewer.scatter_points = points;
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - controls
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::SiteChanged => {
                            self.refresh_outcome_chart();
                            self.refresh_scatter_chart();
                        }
                        ControlPanelAction::PayloadRangeChanged => {
                            self.refresh_scatter_chart();
                        }
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - charts
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
