//! Fluent builder for DatagenConfig.

use crate::config::{DatagenConfig, SampleRange, ScaleFactors};
use crate::error::Result;

/// Fluent builder for DatagenConfig.
///
/// # Example
/// ```
/// use channel_datagen::DatagenBuilder;
///
/// let config = DatagenBuilder::new()
///     .seed(7)
///     .negative_threshold(0.3)
///     .waterfall_label("March")
///     .build()
///     .unwrap();
/// assert_eq!(config.seed, 7);
/// ```
pub struct DatagenBuilder {
    config: DatagenConfig,
}

impl DatagenBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: DatagenConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: DatagenConfig) -> Self {
        Self { config }
    }

    /// Set the seed for reproducibility.
    pub fn seed(mut self, seed: u32) -> Self {
        self.config.seed = seed;
        self
    }

    /// Range of each per-category monthly amount.
    pub fn monthly_amount(mut self, min: i64, max: i64) -> Self {
        self.config.ranges.monthly_amount = SampleRange::new(min, max);
        self
    }

    /// Range of each quarterly treemap leaf.
    pub fn quarterly_size(mut self, min: i64, max: i64) -> Self {
        self.config.ranges.quarterly_size = SampleRange::new(min, max);
        self
    }

    /// Ranges of the gross, net and net-net margin percentages.
    pub fn margin_ranges(
        mut self,
        gross: SampleRange,
        net: SampleRange,
        netnet: SampleRange,
    ) -> Self {
        self.config.ranges.margin_gross = gross;
        self.config.ranges.margin_net = net;
        self.config.ranges.margin_netnet = netnet;
        self
    }

    /// Range of month-to-date total payment volume.
    pub fn mtd_tpv(mut self, min: i64, max: i64) -> Self {
        self.config.ranges.mtd_tpv = SampleRange::new(min, max);
        self
    }

    /// Range of the month-to-date revenue target.
    pub fn mtd_target(mut self, min: i64, max: i64) -> Self {
        self.config.ranges.mtd_target = SampleRange::new(min, max);
        self
    }

    /// Probability that a waterfall segment is negative.
    pub fn negative_threshold(mut self, threshold: f64) -> Self {
        self.config.waterfall.negative_threshold = threshold;
        self
    }

    /// Range of the unscaled waterfall magnitude.
    pub fn waterfall_magnitude(mut self, min: i64, max: i64) -> Self {
        self.config.waterfall.magnitude = SampleRange::new(min, max);
        self
    }

    /// Per-tier waterfall multipliers.
    pub fn scale_factors(mut self, gross: f64, net: f64, netnet: f64) -> Self {
        self.config.waterfall.scale = ScaleFactors { gross, net, netnet };
        self
    }

    /// Label carried on every waterfall.
    pub fn waterfall_label(mut self, label: &str) -> Self {
        self.config.waterfall.label = label.to_string();
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<DatagenConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for DatagenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatagenError;

    #[test]
    fn test_builder_defaults() {
        let config = DatagenBuilder::new().build().unwrap();
        assert_eq!(config, DatagenConfig::default());
    }

    #[test]
    fn test_builder_chaining() {
        let config = DatagenBuilder::new()
            .seed(99)
            .monthly_amount(1, 10)
            .quarterly_size(100, 200)
            .margin_ranges(
                SampleRange::new(30, 40),
                SampleRange::new(20, 30),
                SampleRange::new(10, 20),
            )
            .mtd_tpv(5, 6)
            .mtd_target(7, 8)
            .waterfall_magnitude(2, 4)
            .scale_factors(3.0, 2.0, 1.0)
            .waterfall_label("Q3 close")
            .build()
            .unwrap();

        assert_eq!(config.seed, 99);
        assert_eq!(config.ranges.monthly_amount, SampleRange::new(1, 10));
        assert_eq!(config.ranges.margin_netnet, SampleRange::new(10, 20));
        assert_eq!(config.ranges.mtd_target, SampleRange::new(7, 8));
        assert_eq!(config.waterfall.magnitude, SampleRange::new(2, 4));
        assert_eq!(config.waterfall.scale.gross, 3.0);
        assert_eq!(config.waterfall.label, "Q3 close");
    }

    #[test]
    fn test_builder_validates() {
        let err = DatagenBuilder::new().monthly_amount(10, 1).build().unwrap_err();
        assert!(matches!(err, DatagenError::InvalidRange { .. }));

        let err = DatagenBuilder::new().negative_threshold(-0.1).build().unwrap_err();
        assert!(matches!(err, DatagenError::InvalidThreshold { .. }));
    }

    #[test]
    fn test_from_config() {
        let base = DatagenBuilder::new().seed(5).build().unwrap();
        let config = DatagenBuilder::from_config(base)
            .negative_threshold(0.5)
            .build()
            .unwrap();
        assert_eq!(config.seed, 5);
        assert_eq!(config.waterfall.negative_threshold, 0.5);
    }
}
