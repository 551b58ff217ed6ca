//! Colour palette shared by every chart.

use crate::error::{DashboardError, Result};
use serde::Serialize;

/// Default pastel palette, in assignment order.
pub const DEFAULT_COLORS: [&str; 8] = [
    "#6AA9FA", // blue
    "#F7A6C7", // pink
    "#F9C97D", // yellow
    "#9ADBC7", // teal
    "#B6A4F7", // purple
    "#F2A182", // orange
    "#98B9F2", // light blue
    "#85D1A0", // green
];

/// Stroke for target lines.
pub const TARGET_LINE_COLOR: &str = "#333";
/// Stroke for the waterfall cumulative line.
pub const CUMULATIVE_LINE_COLOR: &str = "#111827";
/// Fill for invisible waterfall baselines.
pub const TRANSPARENT: &str = "transparent";

/// Ordered colour list; series and treemap tiles take `color(index)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self> {
        if colors.is_empty() {
            return Err(DashboardError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Colour for a positional index, wrapping modulo the palette length.
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}
