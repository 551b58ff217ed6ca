//! Waterfall decomposition: signed per-category contributions folded into a
//! running total.

use crate::categories::Category;
use crate::config::{ScaleFactors, WaterfallConfig};
use crate::core::{Chance, Generator, GeneratorExt, Sign};
use crate::error::{DatagenError, Result};
use crate::rng::Mulberry32;
use serde::Serialize;
use std::fmt;

/// Margin tier a waterfall is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginKey {
    Gross,
    Net,
    #[serde(rename = "netnet")]
    NetNet,
}

impl MarginKey {
    /// Generation order of the three dashboard waterfalls.
    pub const GENERATION_ORDER: [MarginKey; 3] =
        [MarginKey::NetNet, MarginKey::Net, MarginKey::Gross];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarginKey::Gross => "gross",
            MarginKey::Net => "net",
            MarginKey::NetNet => "netnet",
        }
    }

    pub fn scale(&self, factors: &ScaleFactors) -> f64 {
        match self {
            MarginKey::Gross => factors.gross,
            MarginKey::Net => factors.net,
            MarginKey::NetNet => factors.netnet,
        }
    }
}

impl fmt::Display for MarginKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the waterfall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallSegment {
    pub name: Category,
    pub start: f64,
    pub value: f64,
    pub end: f64,
}

/// A complete waterfall for one margin tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallResult {
    #[serde(rename = "month")]
    pub label: String,
    #[serde(skip)]
    pub key: MarginKey,
    #[serde(rename = "parts")]
    pub segments: Vec<WaterfallSegment>,
    pub total: f64,
}

impl WaterfallResult {
    /// Verify `end == start + value` per segment, that each segment starts
    /// where the previous one ended (the first at 0), and that `total` is
    /// the last end.
    pub fn check_chain(&self) -> Result<()> {
        let key = self.key.as_str();
        let mut running = 0.0;
        for (index, segment) in self.segments.iter().enumerate() {
            if segment.start != running {
                return Err(DatagenError::broken_chain(
                    key,
                    index,
                    format!("starts at {} but previous end is {}", segment.start, running),
                ));
            }
            if segment.end != segment.start + segment.value {
                return Err(DatagenError::broken_chain(
                    key,
                    index,
                    format!(
                        "end {} != start {} + value {}",
                        segment.end, segment.start, segment.value
                    ),
                ));
            }
            running = segment.end;
        }
        if self.total != running {
            return Err(DatagenError::broken_chain(
                key,
                self.segments.len(),
                format!("total {} != final end {}", self.total, running),
            ));
        }
        Ok(())
    }

    /// Number of segments with a negative contribution.
    pub fn negative_count(&self) -> usize {
        self.segments.iter().filter(|s| s.value < 0.0).count()
    }
}

/// Signed delta for one category: a sign draw, then a magnitude draw,
/// scaled by the tier's factor.
struct SegmentDelta<G> {
    sign: Chance,
    magnitude: G,
}

impl<G: Generator<f64>> Generator<f64> for SegmentDelta<G> {
    fn generate(&self, rng: &mut Mulberry32) -> f64 {
        let sign: Sign = self.sign.generate(rng);
        self.magnitude.generate(rng) * sign.factor()
    }
}

/// Build the waterfall for `key` by folding over `Category::ALL`.
///
/// Consumes two draws per category: the sign, then the magnitude.
pub fn build_waterfall(
    rng: &mut Mulberry32,
    label: &str,
    key: MarginKey,
    config: &WaterfallConfig,
) -> WaterfallResult {
    let scale = key.scale(&config.scale);
    let delta = SegmentDelta {
        sign: Chance::new(config.negative_threshold),
        magnitude: config.magnitude.sampler().map(move |m: i64| m as f64 * scale),
    };

    let mut cumulative = 0.0;
    let segments = Category::ALL
        .iter()
        .map(|&name| {
            let value = delta.generate(rng);
            let start = cumulative;
            cumulative += value;
            WaterfallSegment {
                name,
                start,
                value,
                end: cumulative,
            }
        })
        .collect();

    WaterfallResult {
        label: label.to_string(),
        key,
        segments,
        total: cumulative,
    }
}
