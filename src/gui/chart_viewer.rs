//! Chart Viewer Widget
//! Central scrollable panel holding the two chart cards.

use egui::{Color32, RichText, ScrollArea};

use crate::analysis::{OutcomeSlice, PayloadPoint};
use crate::charts::ChartPlotter;

const CARD_SPACING: f32 = 15.0;
const OUTCOME_CHART_HEIGHT: f32 = 320.0;
const SCATTER_CHART_HEIGHT: f32 = 340.0;

/// Holds the most recent chart data and renders both chart slots.
#[derive(Default)]
pub struct ChartViewer {
    pub outcome_slices: Vec<OutcomeSlice>,
    pub outcome_title: String,
    pub scatter_points: Vec<PayloadPoint>,
    pub scatter_title: String,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw both chart cards stacked in a vertical scroll area.
    pub fn show(&self, ui: &mut egui::Ui) {
        if self.outcome_slices.is_empty() && self.scatter_points.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.draw_outcome_card(ui);
                ui.add_space(CARD_SPACING);
                self.draw_scatter_card(ui);
                ui.add_space(CARD_SPACING);
            });
    }

    fn draw_outcome_card(&self, ui: &mut egui::Ui) {
        Self::card_frame(ui).show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&self.outcome_title).size(18.0).strong());
                ui.add_space(8.0);

                // Legend with per-bucket counts
                ui.horizontal_wrapped(|ui| {
                    for (index, slice) in self.outcome_slices.iter().enumerate() {
                        let color = ChartPlotter::slice_color(&slice.label, index);
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 3.0, color);
                        ui.label(
                            RichText::new(format!("{} ({})", slice.label, slice.value)).size(12.0),
                        );
                        ui.add_space(10.0);
                    }
                });

                ui.add_space(8.0);
                ChartPlotter::draw_outcome_chart(ui, &self.outcome_slices, OUTCOME_CHART_HEIGHT);
            });
        });
    }

    fn draw_scatter_card(&self, ui: &mut egui::Ui) {
        Self::card_frame(ui).show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&self.scatter_title).size(18.0).strong());
                ui.add_space(8.0);

                if self.scatter_points.is_empty() {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("No launches in selection")
                                .size(14.0)
                                .color(ui.visuals().weak_text_color()),
                        );
                    });
                    ui.add_space(20.0);
                } else {
                    ChartPlotter::draw_payload_scatter(
                        ui,
                        &self.scatter_points,
                        SCATTER_CHART_HEIGHT,
                    );
                }
            });
        });
    }

    fn card_frame(ui: &egui::Ui) -> egui::Frame {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(70)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
    }
}
