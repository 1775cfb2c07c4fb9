use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// ChartSpec – declarative chart descriptions
// ---------------------------------------------------------------------------

/// A fully built chart description: marks, axes, and colours, with no
/// knowledge of how they get rendered. Each rebuild replaces the previous
/// spec for its slot wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Scatter(ScatterSpec),
    Line(LineSpec),
    Pie(PieSpec),
    Overlay(OverlaySpec),
}

/// One scatter mark.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    /// Scaled mark size, already clamped into `[MIN_MARK_SIZE, size_bound]`.
    pub size: f32,
    /// Category value; keys the colour and doubles as the hover label.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub x_label: String,
    pub y_label: String,
    /// Render the x axis on a log scale.
    pub log_x: bool,
    pub points: Vec<ScatterPoint>,
    /// Category → colour, in lexical category order.
    pub colors: Vec<(String, Color32)>,
}

impl ScatterSpec {
    /// Colour for a category value; grey for anything outside the legend.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.colors
            .iter()
            .find(|(name, _)| name == category)
            .map(|&(_, c)| c)
            .unwrap_or(Color32::GRAY)
    }
}

/// Mean price per group, one point per distinct group key, ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub x_label: String,
    pub points: Vec<[f64; 2]>,
    /// Present when grouping by a categorical column: x is the label's rank
    /// in this list.
    pub tick_labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub color: Color32,
}

/// Row counts per distinct category value, lexically ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub field: String,
    pub total: usize,
    pub slices: Vec<PieSlice>,
}

/// Raw regression samples plus the precomputed fitted curve, sharing axes.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// (xdimension, price) in load order.
    pub markers: Vec<[f64; 2]>,
    /// (xdimension, fitted) sorted ascending by x so the line is monotone.
    pub fitted: Vec<[f64; 2]>,
}
