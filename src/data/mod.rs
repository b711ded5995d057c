/// Data layer: launch records, loading, and the two chart computations.
///
/// Architecture:
/// ```text
///   URL / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse CSV → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌───────────┐  ┌──────────┐
///   │ aggregate  │  │  filter   │
///   └───────────┘  └──────────┘
///    pie slices     scatter indices
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
