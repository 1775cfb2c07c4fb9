/// Data layer: core tables, loading, and the startup regression fit.
///
/// Architecture:
/// ```text
///  diamonds.csv            regression.csv
///        │                       │
///        ▼                       ▼
///   ┌──────────┐           ┌──────────┐
///   │  loader   │           │  loader   │
///   └──────────┘           └──────────┘
///        │                       │
///        ▼                       ▼
///   ┌──────────┐           ┌───────────────┐
///   │  Table    │           │ RegressionTable│  fitted = OLS(price ~ x²)
///   └──────────┘           └───────────────┘
///        └───────────┬───────────┘
///                    ▼
///             ┌─────────────┐
///             │ DatasetStore │  immutable after load
///             └─────────────┘
/// ```
pub mod loader;
pub mod model;
pub mod regression;
