/// Data layer: parsing, summarizing and loading CSV files.
///
/// Architecture:
/// ```text
///   .csv on disk
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read bytes → text
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  text → Grid (rows of string cells)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  summary  │  Grid → DatasetSummary
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod parser;
pub mod summary;
