/// Data layer: table types, loading, and the degradation ratio.
///
/// Architecture:
/// ```text
///  whitespace-delimited text file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → NumericTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ NumericTable  │  rows × [selector, width, _, metric, ...]
///   └──────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ partition  │  split by selector, divide metrics → Series
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
pub mod partition;
