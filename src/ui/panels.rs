use eframe::egui::{self, ScrollArea, Ui};

use crate::controls::{ChartSlot, ControlEvent, ControlValue, WidgetDomain, WidgetId};
use crate::state::DashboardState;

// ---------------------------------------------------------------------------
// Left side panel – chart controls
// ---------------------------------------------------------------------------

/// Render the control panel. Widgets read their current values from the
/// state and push a [`ControlEvent`] per change; the app applies the events
/// after the frame's panels are drawn.
pub fn control_panel(ui: &mut Ui, state: &DashboardState, events: &mut Vec<ControlEvent>) {
    ui.heading("Controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            widget_group(ui, state, "Scatter plot", ChartSlot::Scatter, events);
            ui.separator();
            widget_group(ui, state, "Variable/Price plot", ChartSlot::Line, events);
            ui.separator();
            widget_group(ui, state, "Samples by categories count", ChartSlot::Pie, events);
            ui.separator();

            if ui.small_button("Reset to defaults").clicked() {
                // One event per widget; each triggers its own recompute.
                for widget in WidgetId::ALL {
                    events.push(ControlEvent {
                        widget,
                        value: widget.default_value(),
                    });
                }
            }
        });
}

/// All widgets feeding one chart slot, under a group heading.
fn widget_group(
    ui: &mut Ui,
    state: &DashboardState,
    heading: &str,
    slot: ChartSlot,
    events: &mut Vec<ControlEvent>,
) {
    ui.strong(heading);
    for widget in WidgetId::ALL.into_iter().filter(|w| w.slot() == slot) {
        match widget.domain() {
            WidgetDomain::Fields(fields) => field_dropdown(ui, state, widget, fields, events),
            WidgetDomain::Stops(stops) => bound_slider(ui, state, widget, stops, events),
        }
    }
}

/// The value a field widget is currently showing.
fn current_field(state: &DashboardState, widget: WidgetId) -> &str {
    match widget {
        WidgetId::ScatterX => &state.scatter_params.x,
        WidgetId::ScatterY => &state.scatter_params.y,
        WidgetId::ScatterSize => &state.scatter_params.size_by,
        WidgetId::ScatterCategory => &state.scatter_params.category,
        WidgetId::LineGroupBy => &state.line_params.group_by,
        WidgetId::PieCategory => &state.pie_params.category,
        WidgetId::ScatterBound => "",
    }
}

fn field_dropdown(
    ui: &mut Ui,
    state: &DashboardState,
    widget: WidgetId,
    fields: &'static [&'static str],
    events: &mut Vec<ControlEvent>,
) {
    let current = current_field(state, widget);

    ui.label(widget.label());
    egui::ComboBox::from_id_salt(widget.key())
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for &field in fields {
                if ui.selectable_label(current == field, field).clicked() && current != field {
                    events.push(ControlEvent {
                        widget,
                        value: ControlValue::Field(field.to_string()),
                    });
                }
            }
        });
    ui.add_space(4.0);
}

fn bound_slider(
    ui: &mut Ui,
    state: &DashboardState,
    widget: WidgetId,
    stops: &'static [f64],
    events: &mut Vec<ControlEvent>,
) {
    let current = state.scatter_params.size_bound;
    let mut value = current;
    let step = stops[1] - stops[0];

    ui.label(widget.label());
    let slider = egui::Slider::new(&mut value, stops[0]..=stops[stops.len() - 1]).step_by(step);
    if ui.add(slider).changed() && value != current {
        events.push(ControlEvent {
            widget,
            value: ControlValue::Bound(value),
        });
    }
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &DashboardState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Facet");
        ui.separator();

        let store = state.store();
        ui.label(format!(
            "{} observations, {} regression samples",
            store.observations.len(),
            store.regression.len()
        ));
        ui.separator();
        ui.label(format!("fit R² {:.3}", store.regression.model.r_squared));
    });
}
