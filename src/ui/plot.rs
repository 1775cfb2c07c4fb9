use eframe::egui::{self, Color32, Pos2, RichText, Sense, Stroke, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, Points};

use crate::chart::spec::{ChartSpec, LineSpec, OverlaySpec, PieSpec, ScatterSpec};
use crate::controls::ChartSlot;
use crate::state::SlotSpec;

// ---------------------------------------------------------------------------
// Chart slot dispatch
// ---------------------------------------------------------------------------

/// Render whatever a slot currently holds: its spec, or a slot-local error
/// message. Sibling slots render independently either way.
pub fn chart_slot(ui: &mut Ui, slot: ChartSlot, spec: &SlotSpec) {
    match spec {
        Ok(ChartSpec::Scatter(spec)) => scatter_chart(ui, spec),
        Ok(ChartSpec::Line(spec)) => line_chart(ui, spec),
        Ok(ChartSpec::Pie(spec)) => pie_chart(ui, spec),
        Ok(ChartSpec::Overlay(spec)) => overlay_chart(ui, spec),
        Err(e) => {
            ui.label(
                RichText::new(format!("{slot:?} chart unavailable: {e}")).color(Color32::RED),
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

/// Log-x position for a point; non-positive values clamp to the axis floor.
fn log_x(x: f64) -> f64 {
    x.max(1e-6).log10()
}

fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec) {
    let mut plot = Plot::new("scatter_plot")
        .legend(Legend::default())
        .height(360.0)
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label(spec.y_label.as_str());

    if spec.log_x {
        // Ticks land on log10 positions; show them as plain values.
        plot = plot.x_axis_formatter(|mark, _range| format!("{:.2}", 10f64.powf(mark.value)));
    }

    plot.show(ui, |plot_ui| {
        for p in &spec.points {
            let x = if spec.log_x { log_x(p.x) } else { p.x };
            plot_ui.points(
                Points::new(vec![[x, p.y]])
                    // a quarter of the spec size in pixels, never sub-pixel
                    .radius((p.size * 0.25).max(1.0))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .color(spec.color_for(&p.category))
                    .name(&p.category),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Aggregated line
// ---------------------------------------------------------------------------

fn line_chart(ui: &mut Ui, spec: &LineSpec) {
    let mut plot = Plot::new("mean_price_line")
        .height(300.0)
        .x_axis_label(spec.x_label.as_str())
        .y_axis_label("mean price");

    if let Some(labels) = &spec.tick_labels {
        let labels = labels.clone();
        plot = plot.x_axis_formatter(move |mark, _range| {
            let rank = mark.value.round();
            if rank < 0.0 || (mark.value - rank).abs() > 1e-6 {
                return String::new();
            }
            labels.get(rank as usize).cloned().unwrap_or_default()
        });
    }

    plot.show(ui, |plot_ui| {
        plot_ui.line(Line::new(spec.points.clone()).width(1.5));
    });
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, spec: &PieSpec) {
    if spec.total == 0 {
        ui.label("No rows to count.");
        return;
    }
    ui.weak(format!("counts by {}", spec.field));

    let side = 240.0;
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(side, side), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = side * 0.5 - 4.0;

    let point_at = |angle: f64| {
        Pos2::new(
            center.x + radius * angle.cos() as f32,
            center.y + radius * angle.sin() as f32,
        )
    };

    // Sectors start at 12 o'clock and run clockwise, drawn as triangle fans
    // so slices over half the circle stay well-formed.
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for slice in &spec.slices {
        let sweep = slice.count as f64 / spec.total as f64 * std::f64::consts::TAU;
        let steps = (sweep / 0.05).ceil().max(1.0) as usize;
        let mut prev = point_at(angle);
        for s in 1..=steps {
            let next = point_at(angle + sweep * s as f64 / steps as f64);
            painter.add(egui::Shape::convex_polygon(
                vec![center, prev, next],
                slice.color,
                Stroke::NONE,
            ));
            prev = next;
        }
        angle += sweep;
    }

    ui.add_space(4.0);
    for slice in &spec.slices {
        ui.horizontal(|ui: &mut Ui| {
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, slice.color);
            let share = slice.count as f64 / spec.total as f64 * 100.0;
            ui.label(format!("{}: {} ({share:.1}%)", slice.label, slice.count));
        });
    }
}

// ---------------------------------------------------------------------------
// Regression overlay
// ---------------------------------------------------------------------------

fn overlay_chart(ui: &mut Ui, spec: &OverlaySpec) {
    ui.label(spec.title.as_str());
    Plot::new("regression_plot")
        .legend(Legend::default())
        .height(360.0)
        .x_axis_label(spec.x_title.as_str())
        .y_axis_label(spec.y_title.as_str())
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(spec.markers.clone())
                    .radius(2.0)
                    .shape(MarkerShape::Circle)
                    .color(Color32::LIGHT_BLUE)
                    .name("X Dimension vs Price"),
            );
            plot_ui.line(
                Line::new(spec.fitted.clone())
                    .width(2.0)
                    .color(Color32::from_rgb(220, 120, 40))
                    .name("Regression model"),
            );
        });
}
