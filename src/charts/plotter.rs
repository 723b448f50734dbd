//! Chart Plotter Module
//! Draws the outcome proportion chart and the payload scatter using egui.

use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke};
use egui_plot::{GridMark, Legend, Plot, PlotPoints, Points};

use crate::analysis::{OutcomeSlice, PayloadPoint};

pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green
pub const FAILURE_COLOR: Color32 = Color32::from_rgb(220, 53, 69); // Red

/// Color palette for sites and booster categories
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(121, 85, 72),   // Brown
];

/// Arc step for pie wedge tessellation, in radians.
const WEDGE_STEP: f32 = 0.05;

/// Creates the dashboard visualizations using egui and egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a proportion-chart bucket.
    /// Success/Failure buckets have fixed colors; sites cycle the palette.
    pub fn slice_color(label: &str, index: usize) -> Color32 {
        match label {
            "Success" => SUCCESS_COLOR,
            "Failure" => FAILURE_COLOR,
            _ => PALETTE[index % PALETTE.len()],
        }
    }

    /// Get color for a booster version category by series index.
    pub fn category_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw the outcome proportion chart as a pie.
    pub fn draw_outcome_chart(ui: &mut egui::Ui, slices: &[OutcomeSlice], height: f32) {
        let desired = egui::vec2(ui.available_width(), height);
        let (rect, _) = ui.allocate_exact_size(desired, Sense::hover());
        let painter = ui.painter().with_clip_rect(rect);

        let total: u32 = slices.iter().map(|s| s.value).sum();
        if total == 0 {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No launches in selection",
                FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
            return;
        }

        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.42;
        let mut angle = -std::f32::consts::FRAC_PI_2;

        for (index, slice) in slices.iter().enumerate() {
            if slice.value == 0 {
                continue;
            }

            let fraction = slice.value as f32 / total as f32;
            let sweep = fraction * std::f32::consts::TAU;
            let color = Self::slice_color(&slice.label, index);

            // convex_polygon needs a convex outline, so build the wedge
            // from small triangles instead of one fan
            let steps = ((sweep / WEDGE_STEP).ceil() as usize).max(1);
            let step = sweep / steps as f32;
            for s in 0..steps {
                let a0 = angle + s as f32 * step;
                let a1 = a0 + step;
                let p0 = Self::arc_point(center, radius, a0);
                let p1 = Self::arc_point(center, radius, a1);
                painter.add(Shape::convex_polygon(
                    vec![center, p0, p1],
                    color,
                    Stroke::NONE,
                ));
            }

            // Percentage label on wedges wide enough to hold one
            if fraction >= 0.05 {
                let mid = angle + sweep / 2.0;
                let label_pos = Self::arc_point(center, radius * 0.62, mid);
                painter.text(
                    label_pos,
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", fraction * 100.0),
                    FontId::proportional(12.0),
                    Color32::WHITE,
                );
            }

            angle += sweep;
        }
    }

    fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
        center + radius * egui::vec2(angle.cos(), angle.sin())
    }

    /// Draw the payload-vs-outcome scatter chart.
    /// X-axis: payload mass (kg), Y-axis: outcome, one series per booster
    /// version category.
    pub fn draw_payload_scatter(ui: &mut egui::Ui, points: &[PayloadPoint], height: f32) {
        let mut categories: Vec<&str> = Vec::new();
        for point in points {
            if !categories.contains(&point.booster_version.as_str()) {
                categories.push(&point.booster_version);
            }
        }

        Plot::new("payload_scatter")
            .height(height)
            .legend(Legend::default())
            .x_axis_label("Payload Mass (kg)")
            .y_axis_label("Launch Outcome")
            .include_y(-0.25)
            .include_y(1.25)
            .allow_scroll(false)
            .y_grid_spacer(|_input| {
                vec![
                    GridMark {
                        value: 0.0,
                        step_size: 1.0,
                    },
                    GridMark {
                        value: 1.0,
                        step_size: 1.0,
                    },
                ]
            })
            .y_axis_formatter(|mark, _range| {
                if (mark.value - 1.0).abs() < 0.01 {
                    "Success".to_owned()
                } else if mark.value.abs() < 0.01 {
                    "Failure".to_owned()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (index, category) in categories.iter().enumerate() {
                    let series: PlotPoints = points
                        .iter()
                        .filter(|p| p.booster_version == *category)
                        .map(|p| [p.payload_mass_kg, if p.success { 1.0 } else { 0.0 }])
                        .collect();

                    plot_ui.points(
                        Points::new(series)
                            .radius(4.0)
                            .color(Self::category_color(index))
                            .name(*category),
                    );
                }
            });
    }
}
