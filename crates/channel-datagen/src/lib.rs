//! Deterministic mock data for the channel partner financial dashboard.
//!
//! Every dataset the dashboard charts is derived from one seeded 32-bit
//! random source, consumed in a fixed order. The same seed always yields
//! byte-identical datasets.
//!
//! # Quick Start
//!
//! ```rust
//! use channel_datagen::{DashboardGenerator, DatagenConfig};
//!
//! let data = DashboardGenerator::new(DatagenConfig::default()).generate();
//! data.validate().unwrap();
//!
//! println!("{}", data.summary());
//! ```
//!
//! # Custom Configuration
//!
//! ```rust
//! use channel_datagen::{DashboardGenerator, DatagenBuilder};
//!
//! let config = DatagenBuilder::new()
//!     .seed(7)
//!     .negative_threshold(0.25)
//!     .scale_factors(2.0, 1.5, 1.0)
//!     .build()
//!     .unwrap();
//!
//! let data = DashboardGenerator::new(config).generate();
//! assert_eq!(data.waterfalls.gross.segments.len(), 8);
//! ```
//!
//! # Output
//!
//! ```rust
//! use channel_datagen::{CsvOutput, DashboardGenerator, JsonOutput};
//!
//! let data = DashboardGenerator::default().generate();
//! let json = JsonOutput::new().compact().format(&data).unwrap();
//! let csv = CsvOutput::new().format_all(&data);
//! assert!(json.starts_with('{'));
//! assert!(csv.starts_with("# monthly_series"));
//! ```

pub mod builder;
pub mod categories;
pub mod config;
pub mod core;
pub mod datasets;
pub mod error;
pub mod generator;
pub mod output;
pub mod rng;
pub mod waterfall;

// Re-export main types for convenience
pub use builder::DatagenBuilder;
pub use categories::{Category, Month, Quarter};
pub use config::{DatagenConfig, DatasetRanges, SampleRange, ScaleFactors, WaterfallConfig};
pub use core::{pick, Chance, Generator, GeneratorExt, Pick, Sign, MAX_BOUND};
pub use datasets::{MarginRow, MonthlySeriesRow, MtdBlock, TreemapNode};
pub use error::DatagenError;
pub use generator::{DashboardData, DashboardGenerator, Waterfalls};
pub use output::{CsvOutput, JsonOutput};
pub use rng::Mulberry32;
pub use waterfall::{build_waterfall, MarginKey, WaterfallResult, WaterfallSegment};
