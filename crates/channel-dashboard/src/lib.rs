//! Chart widget contract for the channel partner dashboard.
//!
//! Turns the datasets from `channel-datagen` into what a chart renderer
//! consumes: colours, formatted values, floating-bar waterfall rows and a
//! fixed catalog of widgets bound to their data.
//!
//! ```rust
//! use channel_dashboard::{format_currency, Dashboard};
//! use channel_datagen::DashboardGenerator;
//!
//! let data = DashboardGenerator::default().generate();
//! let widgets = Dashboard::default().bind_all(&data).unwrap();
//!
//! assert_eq!(widgets.len(), 11);
//! assert_eq!(format_currency(1234.0), "$1,234");
//! ```

pub mod error;
pub mod format;
pub mod palette;
pub mod waterfall_chart;
pub mod widgets;

pub use error::DashboardError;
pub use format::{format_currency, format_number, format_percent};
pub use palette::Palette;
pub use waterfall_chart::{WaterfallChart, WaterfallRow};
pub use widgets::{
    BoundSeries, BoundWidget, ChartKind, Dashboard, DatasetRef, Section, SeriesKind, SeriesSpec,
    ValueFormat, WidgetSpec,
};
