//! Control Panel Widget
//! Left side panel with the site selector, payload range and dataset info.

use egui::{Color32, ComboBox, RichText, Slider};

use crate::analysis::SiteFilter;

/// Label shown for the unrestricted site option.
const ALL_SITES_LABEL: &str = "All Sites";

/// Current chart selection. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteFilter,
    pub payload_low: f64,
    pub payload_high: f64,
}

/// Left side control panel driving both charts.
pub struct ControlPanel {
    pub selection: Selection,
    sites: Vec<String>,
    payload_bounds: (f64, f64),
    row_count: usize,
}

impl ControlPanel {
    /// Build the panel with the dataset's site list and payload bounds.
    /// Defaults: all sites, full payload range.
    pub fn new(sites: Vec<String>, payload_bounds: (f64, f64), row_count: usize) -> Self {
        Self {
            selection: Selection {
                site: SiteFilter::All,
                payload_low: payload_bounds.0,
                payload_high: payload_bounds.1,
            },
            sites,
            payload_bounds,
            row_count,
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🚀 Launch Records")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Interactive Dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Launch Site Section =====
        ui.label(RichText::new("📍 Launch Site").size(14.0).strong());
        ui.add_space(5.0);

        let selected_label = match &self.selection.site {
            SiteFilter::All => ALL_SITES_LABEL.to_owned(),
            SiteFilter::Site(name) => name.clone(),
        };

        ComboBox::from_id_salt("site_filter")
            .width(220.0)
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                let all_selected = self.selection.site == SiteFilter::All;
                if ui.selectable_label(all_selected, ALL_SITES_LABEL).clicked() {
                    self.selection.site = SiteFilter::All;
                    action = ControlPanelAction::SiteChanged;
                }

                for site in &self.sites {
                    let selected =
                        matches!(&self.selection.site, SiteFilter::Site(name) if name == site);
                    if ui.selectable_label(selected, site).clicked() {
                        self.selection.site = SiteFilter::Site(site.clone());
                        action = ControlPanelAction::SiteChanged;
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Payload Range Section =====
        ui.label(RichText::new("⚖ Payload Range (kg)").size(14.0).strong());
        ui.add_space(5.0);

        let (min, max) = self.payload_bounds;

        if ui
            .add(Slider::new(&mut self.selection.payload_low, min..=max).text("Min"))
            .changed()
        {
            action = ControlPanelAction::PayloadRangeChanged;
        }
        if ui
            .add(Slider::new(&mut self.selection.payload_high, min..=max).text("Max"))
            .changed()
        {
            action = ControlPanelAction::PayloadRangeChanged;
        }

        ui.add_space(5.0);
        let range_text = if self.selection.payload_low > self.selection.payload_high {
            "Empty range selected".to_owned()
        } else {
            format!(
                "Showing {:.0} to {:.0} kg",
                self.selection.payload_low, self.selection.payload_high
            )
        };
        ui.label(RichText::new(range_text).size(11.0).color(Color32::GRAY));

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Dataset Section =====
        ui.label(RichText::new("📊 Dataset").size(14.0).strong());
        ui.add_space(5.0);

        ui.label(
            RichText::new(format!(
                "{} launches across {} sites",
                self.row_count,
                self.sites.len()
            ))
            .size(11.0),
        );
        ui.label(
            RichText::new(format!("Payload mass {:.0} to {:.0} kg", min, max))
                .size(11.0)
                .color(Color32::GRAY),
        );

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SiteChanged,
    PayloadRangeChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_sites_and_full_range() {
        let panel = ControlPanel::new(
            vec!["A".to_owned(), "B".to_owned()],
            (500.0, 3000.0),
            3,
        );

        assert_eq!(panel.selection.site, SiteFilter::All);
        assert_eq!(panel.selection.payload_low, 500.0);
        assert_eq!(panel.selection.payload_high, 3000.0);
    }
}
