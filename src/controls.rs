//! Control panel declarations: every widget's stable identity, its domain of
//! legal values, and its default. The UI renders widgets from these tables
//! and emits [`ControlEvent`]s; it never invents values outside a domain,
//! which is what keeps builder parameter errors unreachable in practice.

// ---------------------------------------------------------------------------
// Chart slots
// ---------------------------------------------------------------------------

/// The four chart slots of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Scatter,
    Line,
    Pie,
    Regression,
}

// ---------------------------------------------------------------------------
// Widget domains
// ---------------------------------------------------------------------------

/// Numeric columns offered on the scatter axes and size dropdowns.
pub const AXIS_FIELDS: [&str; 7] = ["carat", "x", "y", "z", "depth", "table_pct", "price"];

/// Grouping columns offered for the mean-price line. Price itself is the
/// aggregated value, so it is not a grouping choice.
pub const GROUP_FIELDS: [&str; 6] = ["carat", "x", "y", "z", "depth", "table_pct"];

/// Categorical columns offered for colouring and the pie.
pub const CATEGORY_FIELDS: [&str; 3] = ["clarity", "color", "cut"];

/// Discrete stops of the size-bound slider.
pub const SIZE_STOPS: [f64; 6] = [20.0, 40.0, 60.0, 80.0, 100.0, 120.0];

/// The legal values of one widget: an enumerated field list or fixed numeric
/// stops. Dropdowns and the slider never leave these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetDomain {
    Fields(&'static [&'static str]),
    Stops(&'static [f64]),
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

/// Stable widget identifiers. Each widget feeds exactly one chart slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    ScatterX,
    ScatterY,
    ScatterSize,
    ScatterCategory,
    ScatterBound,
    LineGroupBy,
    PieCategory,
}

impl WidgetId {
    pub const ALL: [WidgetId; 7] = [
        WidgetId::ScatterX,
        WidgetId::ScatterY,
        WidgetId::ScatterSize,
        WidgetId::ScatterCategory,
        WidgetId::ScatterBound,
        WidgetId::LineGroupBy,
        WidgetId::PieCategory,
    ];

    /// The chart slot this widget feeds.
    pub fn slot(self) -> ChartSlot {
        match self {
            WidgetId::ScatterX
            | WidgetId::ScatterY
            | WidgetId::ScatterSize
            | WidgetId::ScatterCategory
            | WidgetId::ScatterBound => ChartSlot::Scatter,
            WidgetId::LineGroupBy => ChartSlot::Line,
            WidgetId::PieCategory => ChartSlot::Pie,
        }
    }

    /// Unique key, used to salt egui widget ids.
    pub fn key(self) -> &'static str {
        match self {
            WidgetId::ScatterX => "scatter.x-axis",
            WidgetId::ScatterY => "scatter.y-axis",
            WidgetId::ScatterSize => "scatter.size-by",
            WidgetId::ScatterCategory => "scatter.category",
            WidgetId::ScatterBound => "scatter.size-bound",
            WidgetId::LineGroupBy => "line.group-by",
            WidgetId::PieCategory => "pie.category",
        }
    }

    /// Label shown next to the widget.
    pub fn label(self) -> &'static str {
        match self {
            WidgetId::ScatterX => "X axis",
            WidgetId::ScatterY => "Y axis",
            WidgetId::ScatterSize => "Size by",
            WidgetId::ScatterCategory => "Category",
            WidgetId::ScatterBound => "Size bound",
            WidgetId::LineGroupBy => "X axis",
            WidgetId::PieCategory => "Category",
        }
    }

    pub fn domain(self) -> WidgetDomain {
        match self {
            WidgetId::ScatterX | WidgetId::ScatterY | WidgetId::ScatterSize => {
                WidgetDomain::Fields(&AXIS_FIELDS)
            }
            WidgetId::ScatterCategory | WidgetId::PieCategory => {
                WidgetDomain::Fields(&CATEGORY_FIELDS)
            }
            WidgetId::ScatterBound => WidgetDomain::Stops(&SIZE_STOPS),
            WidgetId::LineGroupBy => WidgetDomain::Fields(&GROUP_FIELDS),
        }
    }

    pub fn default_value(self) -> ControlValue {
        match self {
            WidgetId::ScatterX => ControlValue::Field("x".to_string()),
            WidgetId::ScatterY => ControlValue::Field("y".to_string()),
            WidgetId::ScatterSize => ControlValue::Field("z".to_string()),
            WidgetId::ScatterCategory => ControlValue::Field("cut".to_string()),
            WidgetId::ScatterBound => ControlValue::Bound(120.0),
            WidgetId::LineGroupBy => ControlValue::Field("x".to_string()),
            WidgetId::PieCategory => ControlValue::Field("cut".to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Change events
// ---------------------------------------------------------------------------

/// The new value carried by a change event.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    Field(String),
    Bound(f64),
}

/// Emitted by the control panel when a widget's value changes; carries
/// exactly the new value and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlEvent {
    pub widget: WidgetId,
    pub value: ControlValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_is_a_domain_member() {
        for widget in WidgetId::ALL {
            match (widget.domain(), widget.default_value()) {
                (WidgetDomain::Fields(fields), ControlValue::Field(default)) => {
                    assert!(
                        fields.contains(&default.as_str()),
                        "{widget:?}: default '{default}' not in domain"
                    );
                }
                (WidgetDomain::Stops(stops), ControlValue::Bound(default)) => {
                    assert!(
                        stops.contains(&default),
                        "{widget:?}: default {default} not a stop"
                    );
                }
                (domain, default) => {
                    panic!("{widget:?}: default {default:?} does not fit domain {domain:?}")
                }
            }
        }
    }

    #[test]
    fn regression_slot_has_no_widgets() {
        assert!(WidgetId::ALL
            .iter()
            .all(|w| w.slot() != ChartSlot::Regression));
    }

    #[test]
    fn widget_keys_are_unique() {
        let keys: std::collections::BTreeSet<&str> =
            WidgetId::ALL.iter().map(|w| w.key()).collect();
        assert_eq!(keys.len(), WidgetId::ALL.len());
    }
}
