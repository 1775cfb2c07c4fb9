/// Presentation layer: control panel widgets and chart-spec renderers.
pub mod panels;
pub mod plot;
