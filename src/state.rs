use std::sync::Arc;

use crate::chart::builders::{
    self, InvalidParameterError, LineParams, PieParams, ScatterParams,
};
use crate::chart::spec::ChartSpec;
use crate::controls::{ChartSlot, ControlEvent, ControlValue, WidgetId};
use crate::data::model::DatasetStore;

// ---------------------------------------------------------------------------
// Dashboard state – the reactive binding layer
// ---------------------------------------------------------------------------

/// What a chart slot currently shows: the last-built spec, or the parameter
/// error that produced it. An error in one slot never touches its siblings.
pub type SlotSpec = Result<ChartSpec, InvalidParameterError>;

/// Per-session UI state: the current ParameterSet of every widget group and
/// the spec each slot is showing. The dataset store is shared and read-only;
/// everything here is owned by one session.
pub struct DashboardState {
    store: Arc<DatasetStore>,

    pub scatter_params: ScatterParams,
    pub line_params: LineParams,
    pub pie_params: PieParams,

    pub scatter: SlotSpec,
    pub line: SlotSpec,
    pub pie: SlotSpec,
    pub regression: SlotSpec,
}

impl DashboardState {
    /// Seed every widget group with its default and build all four charts.
    /// The regression slot is static from here on; the other three rebuild
    /// on their widgets' change events.
    pub fn new(store: Arc<DatasetStore>) -> Self {
        let scatter_params = ScatterParams {
            x: "x".to_string(),
            y: "y".to_string(),
            size_by: "z".to_string(),
            category: "cut".to_string(),
            size_bound: 120.0,
        };
        let line_params = LineParams {
            group_by: "x".to_string(),
        };
        let pie_params = PieParams {
            category: "cut".to_string(),
        };

        let scatter = builders::scatter(&store.observations, &scatter_params);
        let line = builders::mean_line(&store.observations, &line_params);
        let pie = builders::pie(&store.observations, &pie_params);
        let regression = Ok(builders::regression_overlay(&store.regression));

        DashboardState {
            store,
            scatter_params,
            line_params,
            pie_params,
            scatter,
            line,
            pie,
            regression,
        }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Dispatch one widget change: replace the owning group's ParameterSet
    /// wholesale (the unchanged widgets keep their current values) and
    /// rebuild that one slot. Synchronous; each event runs to completion.
    pub fn apply(&mut self, event: ControlEvent) {
        use ControlValue::{Bound, Field};

        let slot = event.widget.slot();
        match (event.widget, event.value) {
            (WidgetId::ScatterX, Field(x)) => {
                self.scatter_params = ScatterParams {
                    x,
                    ..self.scatter_params.clone()
                };
            }
            (WidgetId::ScatterY, Field(y)) => {
                self.scatter_params = ScatterParams {
                    y,
                    ..self.scatter_params.clone()
                };
            }
            (WidgetId::ScatterSize, Field(size_by)) => {
                self.scatter_params = ScatterParams {
                    size_by,
                    ..self.scatter_params.clone()
                };
            }
            (WidgetId::ScatterCategory, Field(category)) => {
                self.scatter_params = ScatterParams {
                    category,
                    ..self.scatter_params.clone()
                };
            }
            (WidgetId::ScatterBound, Bound(size_bound)) => {
                self.scatter_params = ScatterParams {
                    size_bound,
                    ..self.scatter_params.clone()
                };
            }
            (WidgetId::LineGroupBy, Field(group_by)) => {
                self.line_params = LineParams { group_by };
            }
            (WidgetId::PieCategory, Field(category)) => {
                self.pie_params = PieParams { category };
            }
            (widget, value) => {
                log::warn!("widget {widget:?} emitted incompatible value {value:?}, ignoring");
                return;
            }
        }
        self.rebuild(slot);
    }

    fn rebuild(&mut self, slot: ChartSlot) {
        let result = match slot {
            ChartSlot::Scatter => {
                self.scatter = builders::scatter(&self.store.observations, &self.scatter_params);
                &self.scatter
            }
            ChartSlot::Line => {
                self.line = builders::mean_line(&self.store.observations, &self.line_params);
                &self.line
            }
            ChartSlot::Pie => {
                self.pie = builders::pie(&self.store.observations, &self.pie_params);
                &self.pie
            }
            ChartSlot::Regression => {
                self.regression = Ok(builders::regression_overlay(&self.store.regression));
                &self.regression
            }
        };

        if let Err(e) = result {
            log::warn!("{slot:?} chart rejected its parameters: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::WidgetDomain;
    use crate::data::model::Table;
    use crate::data::regression::RegressionTable;
    use std::collections::BTreeMap;

    fn store() -> Arc<DatasetStore> {
        let mut numeric = BTreeMap::new();
        numeric.insert("carat".to_string(), vec![0.3, 0.4, 0.5]);
        numeric.insert("x".to_string(), vec![4.3, 4.7, 5.1]);
        numeric.insert("y".to_string(), vec![4.3, 4.8, 5.2]);
        numeric.insert("z".to_string(), vec![2.7, 2.9, 3.2]);
        numeric.insert("depth".to_string(), vec![61.0, 62.0, 60.5]);
        numeric.insert("table_pct".to_string(), vec![55.0, 56.0, 57.0]);
        numeric.insert("price".to_string(), vec![400.0, 500.0, 900.0]);
        let mut categorical = BTreeMap::new();
        categorical.insert(
            "cut".to_string(),
            ["Ideal", "Ideal", "Good"].map(String::from).to_vec(),
        );
        categorical.insert("color".to_string(), ["E", "E", "I"].map(String::from).to_vec());
        categorical.insert(
            "clarity".to_string(),
            ["SI2", "SI1", "VS2"].map(String::from).to_vec(),
        );
        let observations = Table::from_columns(numeric, categorical);
        let regression =
            RegressionTable::new(vec![1.0, 2.0, 3.0], vec![13.0, 22.0, 37.0]).unwrap();
        Arc::new(DatasetStore {
            observations,
            regression,
        })
    }

    fn field_event(widget: WidgetId, value: &str) -> ControlEvent {
        ControlEvent {
            widget,
            value: ControlValue::Field(value.to_string()),
        }
    }

    #[test]
    fn startup_builds_every_slot() {
        let state = DashboardState::new(store());
        assert!(state.scatter.is_ok());
        assert!(state.line.is_ok());
        assert!(state.pie.is_ok());
        assert!(state.regression.is_ok());
    }

    #[test]
    fn startup_params_match_widget_defaults() {
        let state = DashboardState::new(store());
        let expect_field = |widget: WidgetId, actual: &str| match widget.default_value() {
            ControlValue::Field(f) => assert_eq!(f, actual, "{widget:?}"),
            other => panic!("{widget:?} declares non-field default {other:?}"),
        };
        expect_field(WidgetId::ScatterX, &state.scatter_params.x);
        expect_field(WidgetId::ScatterY, &state.scatter_params.y);
        expect_field(WidgetId::ScatterSize, &state.scatter_params.size_by);
        expect_field(WidgetId::ScatterCategory, &state.scatter_params.category);
        expect_field(WidgetId::LineGroupBy, &state.line_params.group_by);
        expect_field(WidgetId::PieCategory, &state.pie_params.category);
        match WidgetId::ScatterBound.default_value() {
            ControlValue::Bound(b) => assert_eq!(b, state.scatter_params.size_bound),
            other => panic!("ScatterBound declares non-bound default {other:?}"),
        }
    }

    #[test]
    fn slider_change_recomputes_only_the_scatter() {
        let mut state = DashboardState::new(store());
        let scatter_before = state.scatter.clone();
        let line_before = state.line.clone();
        let pie_before = state.pie.clone();
        let regression_before = state.regression.clone();

        state.apply(ControlEvent {
            widget: WidgetId::ScatterBound,
            value: ControlValue::Bound(60.0),
        });

        assert_eq!(state.scatter_params.size_bound, 60.0);
        assert_ne!(state.scatter, scatter_before);
        assert_eq!(state.line, line_before);
        assert_eq!(state.pie, pie_before);
        assert_eq!(state.regression, regression_before);
    }

    #[test]
    fn pie_change_leaves_the_scatter_untouched() {
        let mut state = DashboardState::new(store());
        let scatter_before = state.scatter.clone();

        state.apply(field_event(WidgetId::PieCategory, "clarity"));

        assert_eq!(state.pie_params.category, "clarity");
        assert_eq!(state.scatter, scatter_before);
        match state.pie.as_ref().unwrap() {
            ChartSpec::Pie(spec) => assert_eq!(spec.field, "clarity"),
            other => panic!("expected pie, got {other:?}"),
        }
    }

    #[test]
    fn scatter_group_keeps_unchanged_widget_values() {
        let mut state = DashboardState::new(store());
        state.apply(field_event(WidgetId::ScatterX, "carat"));
        state.apply(field_event(WidgetId::ScatterCategory, "color"));

        // Both changes stick; the untouched widgets keep their defaults.
        assert_eq!(state.scatter_params.x, "carat");
        assert_eq!(state.scatter_params.category, "color");
        assert_eq!(state.scatter_params.y, "y");
        assert_eq!(state.scatter_params.size_by, "z");
        assert_eq!(state.scatter_params.size_bound, 120.0);
    }

    #[test]
    fn incompatible_event_value_is_ignored() {
        let mut state = DashboardState::new(store());
        let params_before = state.scatter_params.clone();
        let scatter_before = state.scatter.clone();

        state.apply(field_event(WidgetId::ScatterBound, "x"));

        assert_eq!(state.scatter_params, params_before);
        assert_eq!(state.scatter, scatter_before);
    }

    #[test]
    fn every_domain_value_builds_its_chart() {
        // Sweep each widget's full domain; no legal value may error.
        let mut state = DashboardState::new(store());
        for widget in WidgetId::ALL {
            match widget.domain() {
                WidgetDomain::Fields(fields) => {
                    for field in fields {
                        state.apply(field_event(widget, field));
                    }
                }
                WidgetDomain::Stops(stops) => {
                    for &stop in stops {
                        state.apply(ControlEvent {
                            widget,
                            value: ControlValue::Bound(stop),
                        });
                    }
                }
            }
            assert!(state.scatter.is_ok());
            assert!(state.line.is_ok());
            assert!(state.pie.is_ok());
        }
    }
}
