/// Chart core: declarative specs and the pure builders that produce them.
///
/// Builders are functions of `(table, params)` only — no I/O, no hidden
/// state. The display layer consumes the resulting [`spec::ChartSpec`]
/// values; nothing here knows how they get rendered.
pub mod builders;
pub mod spec;
