//! Mock dataset builders.
//!
//! Each builder consumes draws from the shared `Mulberry32` in a fixed
//! order, so swapping two builder calls changes every value generated
//! after the swap.

use crate::categories::{Category, Month, Quarter};
use crate::config::{DatasetRanges, SampleRange, MARGIN_MONTHS, MONTHLY_SERIES_MONTHS, MTD_MONTHS};
use crate::core::Generator;
use crate::rng::Mulberry32;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// ----------------------------------------------------------------------------
// Row types
// ----------------------------------------------------------------------------

/// One month of per-category amounts for the stacked column chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeriesRow {
    pub month: Month,
    /// Amounts in `Category::ALL` order
    pub amounts: Vec<(Category, i64)>,
}

impl MonthlySeriesRow {
    pub fn amount(&self, category: Category) -> Option<i64> {
        self.amounts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, v)| *v)
    }

    /// Stacked height of the column.
    pub fn total(&self) -> i64 {
        self.amounts.iter().map(|(_, v)| v).sum()
    }
}

/// Serialized flat: `{"month": "Jan", "Alliance Partner": 26033, ...}`.
impl Serialize for MonthlySeriesRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.amounts.len() + 1))?;
        map.serialize_entry("month", &self.month)?;
        for (category, amount) in &self.amounts {
            map.serialize_entry(category.as_str(), amount)?;
        }
        map.end()
    }
}

/// Node of the quarter -> category treemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TreemapNode {
    Leaf { name: String, size: i64 },
    Group { name: String, children: Vec<TreemapNode> },
}

impl TreemapNode {
    pub fn name(&self) -> &str {
        match self {
            TreemapNode::Leaf { name, .. } | TreemapNode::Group { name, .. } => name,
        }
    }

    /// Leaf size, or the sum of all descendants for a group.
    pub fn size(&self) -> i64 {
        match self {
            TreemapNode::Leaf { size, .. } => *size,
            TreemapNode::Group { children, .. } => children.iter().map(TreemapNode::size).sum(),
        }
    }

    pub fn children(&self) -> &[TreemapNode] {
        match self {
            TreemapNode::Leaf { .. } => &[],
            TreemapNode::Group { children, .. } => children,
        }
    }
}

/// Month-over-month margin percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginRow {
    pub month: Month,
    pub gross: i64,
    pub net: i64,
    pub netnet: i64,
}

impl MarginRow {
    /// Look up a margin tier by series key.
    pub fn value(&self, key: &str) -> Option<i64> {
        match key {
            "gross" => Some(self.gross),
            "net" => Some(self.net),
            "netnet" => Some(self.netnet),
            _ => None,
        }
    }
}

/// Cumulative month-to-date snapshot for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MtdBlock {
    pub label: String,
    pub gross: i64,
    pub net: i64,
    pub netnet: i64,
    pub tpv: i64,
    pub target: i64,
}

impl MtdBlock {
    /// Look up a field by series key.
    pub fn value(&self, key: &str) -> Option<i64> {
        match key {
            "gross" => Some(self.gross),
            "net" => Some(self.net),
            "netnet" => Some(self.netnet),
            "tpv" => Some(self.tpv),
            "target" => Some(self.target),
            _ => None,
        }
    }
}

/// Label used for a month-to-date block, e.g. `"Jan (MTD)"`.
pub fn mtd_label(month: Month) -> String {
    format!("{} (MTD)", month.as_str())
}

// ----------------------------------------------------------------------------
// Builders
// ----------------------------------------------------------------------------

fn sample_categories(rng: &mut Mulberry32, range: &SampleRange) -> Vec<(Category, i64)> {
    let sampler = range.sampler();
    Category::ALL
        .iter()
        .map(|&category| (category, sampler.generate(rng)))
        .collect()
}

/// Stacked monthly series: one amount per category for each of the first
/// six months.
pub fn monthly_series(rng: &mut Mulberry32, range: &SampleRange) -> Vec<MonthlySeriesRow> {
    let mut rows = Vec::with_capacity(MONTHLY_SERIES_MONTHS);
    for &month in Month::first(MONTHLY_SERIES_MONTHS) {
        let amounts = sample_categories(rng, range);
        rows.push(MonthlySeriesRow { month, amounts });
    }
    rows
}

/// Quarterly hierarchy: four quarter groups, each with one leaf per category.
pub fn quarterly_treemap(rng: &mut Mulberry32, range: &SampleRange) -> Vec<TreemapNode> {
    let mut quarters = Vec::with_capacity(Quarter::ALL.len());
    for quarter in Quarter::ALL {
        let children = sample_categories(rng, range)
            .into_iter()
            .map(|(category, size)| TreemapNode::Leaf {
                name: category.as_str().to_string(),
                size,
            })
            .collect();
        quarters.push(TreemapNode::Group {
            name: quarter.as_str().to_string(),
            children,
        });
    }
    quarters
}

/// Margin percentages for all twelve months, drawn gross, net, net-net.
pub fn margin_mom(rng: &mut Mulberry32, ranges: &DatasetRanges) -> Vec<MarginRow> {
    let gross = ranges.margin_gross.sampler();
    let net = ranges.margin_net.sampler();
    let netnet = ranges.margin_netnet.sampler();

    Month::first(MARGIN_MONTHS)
        .iter()
        .map(|&month| {
            let gross = gross.generate(rng);
            let net = net.generate(rng);
            let netnet = netnet.generate(rng);
            MarginRow {
                month,
                gross,
                net,
                netnet,
            }
        })
        .collect()
}

/// Month-to-date blocks for the first four months.
pub fn mtd_blocks(rng: &mut Mulberry32, ranges: &DatasetRanges) -> Vec<MtdBlock> {
    let gross = ranges.mtd_gross.sampler();
    let net = ranges.mtd_net.sampler();
    let netnet = ranges.mtd_netnet.sampler();
    let tpv = ranges.mtd_tpv.sampler();
    let target = ranges.mtd_target.sampler();

    Month::first(MTD_MONTHS)
        .iter()
        .map(|&month| {
            let gross = gross.generate(rng);
            let net = net.generate(rng);
            let netnet = netnet.generate(rng);
            let tpv = tpv.generate(rng);
            let target = target.generate(rng);
            MtdBlock {
                label: mtd_label(month),
                gross,
                net,
                netnet,
                tpv,
                target,
            }
        })
        .collect()
}
