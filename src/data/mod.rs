/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   data/penguins.csv or --data <FILE>
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse CSV → PenguinDataset (once, at startup)
///   └──────────┘
///        │  Arc<PenguinDataset>
///        ▼
///   ┌──────────┐
///   │  filter  │  species ∈ S AND island ∈ I → FilteredView
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
