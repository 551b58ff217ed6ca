//! Configuration structures for dataset generation.
//!
//! Defaults reproduce the stock demo dashboard. A YAML file may override any
//! subset of fields; missing fields fall back to the defaults.

use crate::core::{is_exact_bound, Pick, MAX_BOUND};
use crate::error::{DatagenError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Months covered by the stacked monthly series.
pub const MONTHLY_SERIES_MONTHS: usize = 6;
/// Months covered by the month-over-month margin rows.
pub const MARGIN_MONTHS: usize = 12;
/// Months covered by the cumulative month-to-date blocks.
pub const MTD_MONTHS: usize = 4;

/// Top-level configuration for dataset generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatagenConfig {
    /// Seed for the shared random source
    pub seed: u32,

    /// Sampling ranges for every dataset
    pub ranges: DatasetRanges,

    /// Waterfall decomposition settings
    pub waterfall: WaterfallConfig,
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ranges: DatasetRanges::default(),
            waterfall: WaterfallConfig::default(),
        }
    }
}

impl DatagenConfig {
    /// Parse a configuration from YAML text and validate it.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| DatagenError::ConfigLoad {
                path: "<inline>".into(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DatagenError::ConfigLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| DatagenError::ConfigLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every range, threshold and scale factor.
    pub fn validate(&self) -> Result<()> {
        self.ranges.validate()?;
        self.waterfall.validate()
    }
}

/// Closed integer range `[min, max]` for one sampled field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: i64,
    pub max: i64,
}

impl SampleRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Sampler over this range.
    ///
    /// # Panics
    ///
    /// Panics when the range is inverted; call `validate` first for
    /// user-supplied ranges.
    pub fn sampler(&self) -> Pick {
        Pick::new(self.min, self.max)
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, field: &str) -> Result<()> {
        if self.min > self.max {
            return Err(DatagenError::invalid_range(field, self.min, self.max));
        }
        for value in [self.min, self.max] {
            if !is_exact_bound(value) {
                return Err(DatagenError::BoundTooLarge {
                    field: field.to_string(),
                    value,
                    limit: MAX_BOUND,
                });
            }
        }
        Ok(())
    }
}

/// Sampling ranges for each dataset field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetRanges {
    /// Per-category amount in the stacked monthly series
    pub monthly_amount: SampleRange,
    /// Per-category leaf size in the quarterly treemap
    pub quarterly_size: SampleRange,
    /// Gross margin percentage
    pub margin_gross: SampleRange,
    /// Net margin percentage
    pub margin_net: SampleRange,
    /// Net-net margin percentage
    pub margin_netnet: SampleRange,
    /// Month-to-date gross revenue
    pub mtd_gross: SampleRange,
    /// Month-to-date net revenue
    pub mtd_net: SampleRange,
    /// Month-to-date net-net revenue
    pub mtd_netnet: SampleRange,
    /// Month-to-date total payment volume
    pub mtd_tpv: SampleRange,
    /// Month-to-date revenue target
    pub mtd_target: SampleRange,
}

impl Default for DatasetRanges {
    fn default() -> Self {
        Self {
            monthly_amount: SampleRange::new(8_000, 38_000),
            quarterly_size: SampleRange::new(80_000, 320_000),
            margin_gross: SampleRange::new(18, 42),
            margin_net: SampleRange::new(10, 30),
            margin_netnet: SampleRange::new(6, 22),
            mtd_gross: SampleRange::new(120_000, 320_000),
            mtd_net: SampleRange::new(80_000, 220_000),
            mtd_netnet: SampleRange::new(60_000, 180_000),
            mtd_tpv: SampleRange::new(1_000_000, 3_500_000),
            mtd_target: SampleRange::new(90_000, 260_000),
        }
    }
}

impl DatasetRanges {
    fn validate(&self) -> Result<()> {
        self.monthly_amount.validate("ranges.monthly_amount")?;
        self.quarterly_size.validate("ranges.quarterly_size")?;
        self.margin_gross.validate("ranges.margin_gross")?;
        self.margin_net.validate("ranges.margin_net")?;
        self.margin_netnet.validate("ranges.margin_netnet")?;
        self.mtd_gross.validate("ranges.mtd_gross")?;
        self.mtd_net.validate("ranges.mtd_net")?;
        self.mtd_netnet.validate("ranges.mtd_netnet")?;
        self.mtd_tpv.validate("ranges.mtd_tpv")?;
        self.mtd_target.validate("ranges.mtd_target")
    }
}

/// Multipliers applied to waterfall magnitudes per margin tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleFactors {
    pub gross: f64,
    pub net: f64,
    pub netnet: f64,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self {
            gross: 1.6,
            net: 1.2,
            netnet: 1.0,
        }
    }
}

impl ScaleFactors {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("waterfall.scale.gross", self.gross),
            ("waterfall.scale.net", self.net),
            ("waterfall.scale.netnet", self.netnet),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DatagenError::InvalidScale {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Waterfall decomposition settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaterfallConfig {
    /// Label carried on every generated waterfall
    pub label: String,

    /// A draw at or below this value makes a segment negative
    pub negative_threshold: f64,

    /// Range of the unscaled segment magnitude
    pub magnitude: SampleRange,

    /// Per-tier magnitude multipliers
    pub scale: ScaleFactors,
}

impl Default for WaterfallConfig {
    fn default() -> Self {
        Self {
            label: "Selected Month".to_string(),
            negative_threshold: 0.2,
            magnitude: SampleRange::new(1, 8),
            scale: ScaleFactors::default(),
        }
    }
}

impl WaterfallConfig {
    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.negative_threshold) {
            return Err(DatagenError::InvalidThreshold {
                field: "waterfall.negative_threshold".to_string(),
                value: self.negative_threshold,
            });
        }
        self.magnitude.validate("waterfall.magnitude")?;
        self.scale.validate()
    }
}
