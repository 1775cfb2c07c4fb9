use std::sync::Arc;

use eframe::egui;

use crate::controls::{ChartSlot, ControlEvent};
use crate::data::model::DatasetStore;
use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FacetApp {
    pub state: DashboardState,
}

impl FacetApp {
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self {
            state: DashboardState::new(store),
        }
    }
}

impl eframe::App for FacetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events: Vec<ControlEvent> = Vec::new();

        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: chart controls ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::control_panel(ui, &self.state, &mut events);
            });

        // ---- Central panel: the four chart slots ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Scatter plot");
                    plot::chart_slot(ui, ChartSlot::Scatter, &self.state.scatter);
                    ui.separator();

                    ui.columns(2, |cols| {
                        cols[0].heading("Variable/Price plot");
                        plot::chart_slot(&mut cols[0], ChartSlot::Line, &self.state.line);
                        cols[1].heading("Samples by categories count");
                        plot::chart_slot(&mut cols[1], ChartSlot::Pie, &self.state.pie);
                    });
                    ui.separator();

                    ui.heading("Regression plot");
                    plot::chart_slot(ui, ChartSlot::Regression, &self.state.regression);
                });
        });

        // One complete, synchronous recomputation per event, in arrival
        // order; last write wins at the display on the next frame.
        for event in events {
            self.state.apply(event);
        }
    }
}
