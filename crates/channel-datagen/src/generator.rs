//! Main dashboard data generator.

use crate::categories::{Category, Quarter};
use crate::config::{DatagenConfig, MARGIN_MONTHS, MONTHLY_SERIES_MONTHS, MTD_MONTHS};
use crate::datasets::{
    margin_mom, monthly_series, mtd_blocks, quarterly_treemap, MarginRow, MonthlySeriesRow,
    MtdBlock, TreemapNode,
};
use crate::error::{DatagenError, Result};
use crate::rng::Mulberry32;
use crate::waterfall::{build_waterfall, MarginKey, WaterfallResult};
use serde::Serialize;
use tracing::{debug, info};

/// The three margin waterfalls shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waterfalls {
    pub netnet: WaterfallResult,
    pub net: WaterfallResult,
    pub gross: WaterfallResult,
}

impl Waterfalls {
    pub fn get(&self, key: MarginKey) -> &WaterfallResult {
        match key {
            MarginKey::NetNet => &self.netnet,
            MarginKey::Net => &self.net,
            MarginKey::Gross => &self.gross,
        }
    }

    /// Waterfalls in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &WaterfallResult> {
        MarginKey::GENERATION_ORDER.into_iter().map(move |key| self.get(key))
    }
}

/// All generated datasets, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    /// Seed the datasets were generated from
    pub seed: u32,
    /// Stacked per-category amounts for the first six months
    pub monthly_series: Vec<MonthlySeriesRow>,
    /// Quarter -> category hierarchy
    pub quarterly_treemap: Vec<TreemapNode>,
    /// Month-over-month margin percentages
    pub margins: Vec<MarginRow>,
    /// Cumulative month-to-date blocks
    pub mtd_blocks: Vec<MtdBlock>,
    /// Per-category margin waterfalls
    pub waterfalls: Waterfalls,
}

impl DashboardData {
    /// Get a summary of the generated data.
    pub fn summary(&self) -> String {
        format!(
            "Seed {}: {} monthly rows, {} quarters, {} margin rows, {} MTD blocks, \
             waterfall totals netnet={:.1} net={:.1} gross={:.1}",
            self.seed,
            self.monthly_series.len(),
            self.quarterly_treemap.len(),
            self.margins.len(),
            self.mtd_blocks.len(),
            self.waterfalls.netnet.total,
            self.waterfalls.net.total,
            self.waterfalls.gross.total,
        )
    }

    /// Children of one quarter in the treemap.
    pub fn quarter(&self, quarter: Quarter) -> Option<&TreemapNode> {
        self.quarterly_treemap.get(quarter.index())
    }

    /// Check row counts, category coverage and waterfall chains.
    pub fn validate(&self) -> Result<()> {
        check_rows("monthly_series", MONTHLY_SERIES_MONTHS, self.monthly_series.len())?;
        check_rows("quarterly_treemap", Quarter::ALL.len(), self.quarterly_treemap.len())?;
        check_rows("margins", MARGIN_MONTHS, self.margins.len())?;
        check_rows("mtd_blocks", MTD_MONTHS, self.mtd_blocks.len())?;

        for row in &self.monthly_series {
            let keys = row.amounts.iter().map(|(c, _)| c.as_str());
            check_coverage("monthly_series", row.month.as_str(), keys)?;
        }

        for quarter in &self.quarterly_treemap {
            let keys = quarter.children().iter().map(|c| c.name());
            check_coverage("quarterly_treemap", quarter.name(), keys)?;
        }

        for waterfall in self.waterfalls.iter() {
            let keys = waterfall.segments.iter().map(|s| s.name.as_str());
            check_coverage("waterfalls", waterfall.key.as_str(), keys)?;
            waterfall.check_chain()?;
        }

        Ok(())
    }
}

fn check_rows(dataset: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(DatagenError::RowCount {
            dataset: dataset.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_coverage<'a>(
    dataset: &str,
    row: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<()> {
    let keys: Vec<&str> = keys.collect();
    let expected: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    if keys != expected {
        return Err(DatagenError::CategoryCoverage {
            dataset: dataset.to_string(),
            row: row.to_string(),
        });
    }
    Ok(())
}

/// Main entry point for generating dashboard data.
pub struct DashboardGenerator {
    config: DatagenConfig,
}

impl DashboardGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: DatagenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DatagenConfig {
        &self.config
    }

    /// Generate every dataset from a freshly seeded random source.
    ///
    /// Order is fixed: monthly series, quarterly treemap, margins, MTD
    /// blocks, then the net-net, net and gross waterfalls.
    pub fn generate(&self) -> DashboardData {
        let mut rng = Mulberry32::new(self.config.seed);
        self.generate_with(&mut rng)
    }

    /// Generate every dataset from the caller's random source, leaving it
    /// positioned after the last draw.
    pub fn generate_with(&self, rng: &mut Mulberry32) -> DashboardData {
        let ranges = &self.config.ranges;

        let monthly_series = monthly_series(rng, &ranges.monthly_amount);
        debug!(rows = monthly_series.len(), "generated monthly series");

        let quarterly_treemap = quarterly_treemap(rng, &ranges.quarterly_size);
        debug!(quarters = quarterly_treemap.len(), "generated quarterly treemap");

        let margins = margin_mom(rng, ranges);
        debug!(rows = margins.len(), "generated margin rows");

        let mtd_blocks = mtd_blocks(rng, ranges);
        debug!(rows = mtd_blocks.len(), "generated MTD blocks");

        let waterfall = &self.config.waterfall;
        let netnet = build_waterfall(rng, &waterfall.label, MarginKey::NetNet, waterfall);
        let net = build_waterfall(rng, &waterfall.label, MarginKey::Net, waterfall);
        let gross = build_waterfall(rng, &waterfall.label, MarginKey::Gross, waterfall);
        debug!(
            netnet = netnet.total,
            net = net.total,
            gross = gross.total,
            "generated waterfalls"
        );

        info!(seed = self.config.seed, "dashboard datasets generated");

        DashboardData {
            seed: self.config.seed,
            monthly_series,
            quarterly_treemap,
            margins,
            mtd_blocks,
            waterfalls: Waterfalls { netnet, net, gross },
        }
    }
}

impl Default for DashboardGenerator {
    fn default() -> Self {
        Self::new(DatagenConfig::default())
    }
}
