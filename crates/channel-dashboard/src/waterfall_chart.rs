//! Floating-bar layout for waterfall charts.
//!
//! Each step is drawn as an invisible bar up to `baseline` with the visible
//! `delta` stacked on top, plus a line through the running total.

use channel_datagen::{Category, MarginKey, WaterfallResult};
use serde::Serialize;

/// Padding added below and above the value axis.
pub const DOMAIN_PADDING: f64 = 2.0;

/// One plotted step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallRow {
    pub name: Category,
    /// Lower edge of the floating bar: `min(start, end)`
    pub baseline: f64,
    /// Signed contribution
    pub delta: f64,
    /// Running total after this step
    pub cumulative: f64,
}

/// A waterfall laid out for plotting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallChart {
    pub label: String,
    pub key: MarginKey,
    pub rows: Vec<WaterfallRow>,
    /// Value axis `[min, max]`, always including zero
    pub domain: [f64; 2],
    pub total: f64,
}

impl WaterfallChart {
    pub fn from_result(result: &WaterfallResult) -> Self {
        let rows = result
            .segments
            .iter()
            .map(|s| WaterfallRow {
                name: s.name,
                baseline: s.start.min(s.end),
                delta: s.value,
                cumulative: s.end,
            })
            .collect();

        let low = result
            .segments
            .iter()
            .map(|s| s.start.min(s.end))
            .fold(0.0, f64::min);
        let high = result
            .segments
            .iter()
            .map(|s| s.start.max(s.end))
            .fold(0.0, f64::max);

        Self {
            label: result.label.clone(),
            key: result.key,
            rows,
            domain: [low - DOMAIN_PADDING, high + DOMAIN_PADDING],
            total: result.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use channel_datagen::DashboardGenerator;

    #[test]
    fn test_reference_netnet_chart() {
        let data = DashboardGenerator::default().generate();
        let chart = WaterfallChart::from_result(&data.waterfalls.netnet);

        assert_eq!(chart.rows.len(), 8);
        assert_eq!(chart.domain, [-2.0, 35.0]);
        assert_eq!(chart.total, 33.0);

        // Referral Partner steps down 16 -> 14
        let step = &chart.rows[2];
        assert_eq!(step.name, Category::ReferralPartner);
        assert_eq!(step.baseline, 14.0);
        assert_eq!(step.delta, -2.0);
        assert_eq!(step.cumulative, 14.0);

        let first = &chart.rows[0];
        assert_eq!((first.baseline, first.delta, first.cumulative), (0.0, 8.0, 8.0));
    }

    #[test]
    fn test_domain_spans_negative_totals() {
        let config = channel_datagen::DatagenBuilder::new()
            .negative_threshold(1.0)
            .build()
            .unwrap();
        let data = DashboardGenerator::new(config).generate();
        let chart = WaterfallChart::from_result(&data.waterfalls.gross);

        assert!(chart.total < 0.0);
        assert_eq!(chart.domain[0], chart.total - DOMAIN_PADDING);
        assert_eq!(chart.domain[1], DOMAIN_PADDING);
        for row in &chart.rows {
            assert!(row.baseline >= chart.domain[0]);
            assert!(row.baseline - row.delta <= chart.domain[1]);
        }
    }

    #[test]
    fn test_baseline_is_lower_edge() {
        let data = DashboardGenerator::default().generate();
        for waterfall in data.waterfalls.iter() {
            let chart = WaterfallChart::from_result(waterfall);
            for (row, segment) in chart.rows.iter().zip(&waterfall.segments) {
                assert!(row.baseline <= segment.start);
                assert!(row.baseline <= segment.end);
                let top = segment.start.max(segment.end);
                assert!((row.baseline + row.delta.abs() - top).abs() < 1e-9);
            }
        }
    }
}
