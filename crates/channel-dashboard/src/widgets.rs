//! Widget catalog and binding of widgets to generated datasets.
//!
//! A `WidgetSpec` says which dataset a chart reads and which fields become
//! series. `Dashboard::bind` resolves a spec against `DashboardData` into
//! labelled numeric series the renderer can draw directly.

use crate::error::{DashboardError, Result};
use crate::format::{format_currency, format_number, format_percent};
use crate::palette::{Palette, CUMULATIVE_LINE_COLOR, TARGET_LINE_COLOR, TRANSPARENT};
use crate::waterfall_chart::{WaterfallChart, WaterfallRow};
use channel_datagen::{Category, DashboardData, MarginKey, Quarter};
use serde::Serialize;
use tracing::debug;

// ----------------------------------------------------------------------------
// Widget descriptions
// ----------------------------------------------------------------------------

/// Dashboard section a widget is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Revenue,
    Tpv,
    Margin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    StackedBar,
    Composed,
    Line,
    Treemap,
    Waterfall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Bar,
    Line,
}

/// How values are rendered on ticks and tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "style")]
pub enum ValueFormat {
    Currency,
    Number,
    Percent { decimals: usize },
}

impl ValueFormat {
    pub fn apply(&self, value: f64) -> String {
        match self {
            ValueFormat::Currency => format_currency(value),
            ValueFormat::Number => format_number(value),
            ValueFormat::Percent { decimals } => format_percent(value, *decimals),
        }
    }
}

/// Dataset a widget reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "dataset")]
pub enum DatasetRef {
    MtdBlocks,
    MonthlySeries,
    QuarterlyTreemap { quarter: Quarter },
    Margins,
    Waterfall { key: MarginKey },
}

/// One plotted series of a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesSpec {
    /// Field of the dataset row
    pub key: String,
    /// Legend name
    pub name: String,
    pub color: String,
    pub kind: SeriesKind,
}

impl SeriesSpec {
    fn new(key: &str, name: &str, color: &str, kind: SeriesKind) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            kind,
        }
    }
}

/// A chart card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSpec {
    pub id: String,
    pub section: Section,
    pub title: String,
    pub subtitle: String,
    pub chart: ChartKind,
    pub dataset: DatasetRef,
    pub series: Vec<SeriesSpec>,
    pub format: ValueFormat,
}

// ----------------------------------------------------------------------------
// Bound widgets
// ----------------------------------------------------------------------------

/// A series with its values resolved, one value per label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundSeries {
    pub key: String,
    pub name: String,
    pub color: String,
    pub kind: SeriesKind,
    pub values: Vec<f64>,
}

/// A widget with data attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundWidget {
    pub id: String,
    pub section: Section,
    pub title: String,
    pub subtitle: String,
    pub chart: ChartKind,
    pub format: ValueFormat,
    /// Category axis labels
    pub labels: Vec<String>,
    pub series: Vec<BoundSeries>,
    /// Per-point fills (treemap tiles only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub point_colors: Vec<String>,
    /// Fixed value axis (waterfalls only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
}

impl BoundWidget {
    pub fn series(&self, key: &str) -> Option<&BoundSeries> {
        self.series.iter().find(|s| s.key == key)
    }
}

// ----------------------------------------------------------------------------
// Dashboard
// ----------------------------------------------------------------------------

/// The fixed widget layout plus the palette it is coloured with.
pub struct Dashboard {
    palette: Palette,
    treemap_quarter: Quarter,
}

impl Dashboard {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            treemap_quarter: Quarter::Q3,
        }
    }

    /// Quarter shown by the treemap card (Q3 unless changed).
    pub fn with_treemap_quarter(mut self, quarter: Quarter) -> Self {
        self.treemap_quarter = quarter;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// All widgets in display order.
    pub fn widgets(&self) -> Vec<WidgetSpec> {
        let p = &self.palette;
        let currency = ValueFormat::Currency;
        let percent = ValueFormat::Percent { decimals: 0 };
        let mtd_subtitle = "MTD Cumulative \u{2022} Last 4 months";
        let mom_subtitle = "Column \u{2022} 12 months";
        let waterfall_subtitle = "Waterfall by Partner Category";

        let mut widgets = vec![
            widget(
                "net_revenue_vs_target",
                Section::Revenue,
                "Net Revenue vs Target",
                mtd_subtitle,
                ChartKind::Composed,
                DatasetRef::MtdBlocks,
                vec![
                    SeriesSpec::new("net", "Net Revenue (MTD)", p.color(0), SeriesKind::Bar),
                    SeriesSpec::new("target", "Target", TARGET_LINE_COLOR, SeriesKind::Line),
                ],
                currency,
            ),
            widget(
                "gross_revenue",
                Section::Revenue,
                "Gross Revenue",
                mtd_subtitle,
                ChartKind::Bar,
                DatasetRef::MtdBlocks,
                vec![SeriesSpec::new("gross", "Gross (MTD)", p.color(5), SeriesKind::Bar)],
                currency,
            ),
            widget(
                "netnet_revenue_monthly",
                Section::Revenue,
                "Net Net Revenue \u{2014} Monthly by Partner",
                "Stacked Column by Category",
                ChartKind::StackedBar,
                DatasetRef::MonthlySeries,
                Category::ALL
                    .iter()
                    .map(|c| {
                        let color = p.color(c.index());
                        SeriesSpec::new(c.as_str(), c.as_str(), color, SeriesKind::Bar)
                    })
                    .collect(),
                currency,
            ),
            widget(
                "netnet_revenue_quarterly",
                Section::Revenue,
                "Net Net Revenue \u{2014} Quarterly Breakdown",
                "Treemap by Category (select a quarter)",
                ChartKind::Treemap,
                DatasetRef::QuarterlyTreemap {
                    quarter: self.treemap_quarter,
                },
                vec![SeriesSpec::new("size", "Net Net Revenue", p.color(0), SeriesKind::Bar)],
                currency,
            ),
            widget(
                "tpv",
                Section::Tpv,
                "TPV",
                mtd_subtitle,
                ChartKind::Line,
                DatasetRef::MtdBlocks,
                vec![SeriesSpec::new("tpv", "TPV (MTD)", p.color(4), SeriesKind::Line)],
                ValueFormat::Number,
            ),
        ];

        let tiers = [
            (MarginKey::NetNet, "Net Net Margin", 0),
            (MarginKey::Net, "Net Margin", 5),
            (MarginKey::Gross, "Gross Margin", 3),
        ];

        for (key, name, color) in tiers {
            widgets.push(widget(
                &format!("{}_margin_mom", key),
                Section::Margin,
                &format!("{} \u{2014} MoM", name),
                mom_subtitle,
                ChartKind::Bar,
                DatasetRef::Margins,
                vec![SeriesSpec::new(key.as_str(), name, p.color(color), SeriesKind::Bar)],
                percent,
            ));
        }

        for (key, name, color) in tiers {
            widgets.push(widget(
                &format!("{}_margin_waterfall", key),
                Section::Margin,
                &format!("{} \u{2014} Monthly", name),
                waterfall_subtitle,
                ChartKind::Waterfall,
                DatasetRef::Waterfall { key },
                vec![
                    SeriesSpec::new("baseline", "Start", TRANSPARENT, SeriesKind::Bar),
                    SeriesSpec::new("delta", "Change", p.color(color), SeriesKind::Bar),
                    SeriesSpec::new(
                        "cumulative",
                        "Cumulative",
                        CUMULATIVE_LINE_COLOR,
                        SeriesKind::Line,
                    ),
                ],
                ValueFormat::Percent { decimals: 1 },
            ));
        }

        widgets
    }

    /// Resolve one widget against generated data.
    pub fn bind(&self, spec: &WidgetSpec, data: &DashboardData) -> Result<BoundWidget> {
        let mut point_colors = Vec::new();
        let mut domain = None;

        let (labels, series): (Vec<String>, Vec<BoundSeries>) = match spec.dataset {
            DatasetRef::MtdBlocks => {
                let labels = data.mtd_blocks.iter().map(|b| b.label.clone()).collect();
                let series = bind_series(spec, |key| {
                    data.mtd_blocks
                        .iter()
                        .map(|b| b.value(key).map(|v| v as f64))
                        .collect()
                })?;
                (labels, series)
            }
            DatasetRef::MonthlySeries => {
                let labels = data
                    .monthly_series
                    .iter()
                    .map(|r| r.month.to_string())
                    .collect();
                let series = bind_series(spec, |key| {
                    let category: Category = key.parse().ok()?;
                    data.monthly_series
                        .iter()
                        .map(|r| r.amount(category).map(|v| v as f64))
                        .collect()
                })?;
                (labels, series)
            }
            DatasetRef::QuarterlyTreemap { quarter } => {
                let node = data
                    .quarter(quarter)
                    .ok_or_else(|| DashboardError::MissingQuarter {
                        widget: spec.id.clone(),
                        quarter: quarter.to_string(),
                    })?;
                let leaves = node.children();
                let labels = leaves.iter().map(|l| l.name().to_string()).collect();
                point_colors = (0..leaves.len())
                    .map(|i| self.palette.color(i).to_string())
                    .collect();
                let series = bind_series(spec, |key| {
                    (key == "size").then(|| leaves.iter().map(|l| l.size() as f64).collect())
                })?;
                (labels, series)
            }
            DatasetRef::Margins => {
                let labels = data.margins.iter().map(|r| r.month.to_string()).collect();
                let series = bind_series(spec, |key| {
                    data.margins
                        .iter()
                        .map(|r| r.value(key).map(|v| v as f64))
                        .collect()
                })?;
                (labels, series)
            }
            DatasetRef::Waterfall { key } => {
                let chart = WaterfallChart::from_result(data.waterfalls.get(key));
                domain = Some(chart.domain);
                let labels = chart.rows.iter().map(|r| r.name.to_string()).collect();
                let series = bind_series(spec, |field| {
                    let select: fn(&WaterfallRow) -> f64 = match field {
                        "baseline" => |r| r.baseline,
                        "delta" => |r| r.delta,
                        "cumulative" => |r| r.cumulative,
                        _ => return None,
                    };
                    Some(chart.rows.iter().map(select).collect())
                })?;
                (labels, series)
            }
        };

        debug!(widget = %spec.id, points = labels.len(), "bound widget");

        Ok(BoundWidget {
            id: spec.id.clone(),
            section: spec.section,
            title: spec.title.clone(),
            subtitle: spec.subtitle.clone(),
            chart: spec.chart,
            format: spec.format,
            labels,
            series,
            point_colors,
            domain,
        })
    }

    /// Resolve every widget in display order.
    pub fn bind_all(&self, data: &DashboardData) -> Result<Vec<BoundWidget>> {
        self.widgets()
            .iter()
            .map(|spec| self.bind(spec, data))
            .collect()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

#[allow(clippy::too_many_arguments)]
fn widget(
    id: &str,
    section: Section,
    title: &str,
    subtitle: &str,
    chart: ChartKind,
    dataset: DatasetRef,
    series: Vec<SeriesSpec>,
    format: ValueFormat,
) -> WidgetSpec {
    WidgetSpec {
        id: id.to_string(),
        section,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        chart,
        dataset,
        series,
        format,
    }
}

/// Resolve each series through `lookup`, which yields `None` for a key the
/// dataset does not have.
fn bind_series<F>(spec: &WidgetSpec, lookup: F) -> Result<Vec<BoundSeries>>
where
    F: Fn(&str) -> Option<Vec<f64>>,
{
    spec.series
        .iter()
        .map(|s| {
            let values =
                lookup(&s.key).ok_or_else(|| DashboardError::unknown_series(&spec.id, &s.key))?;
            Ok(BoundSeries {
                key: s.key.clone(),
                name: s.name.clone(),
                color: s.color.clone(),
                kind: s.kind,
                values,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use channel_datagen::DashboardGenerator;

    fn bound(id: &str) -> BoundWidget {
        let dashboard = Dashboard::default();
        let data = DashboardGenerator::default().generate();
        let spec = dashboard
            .widgets()
            .into_iter()
            .find(|w| w.id == id)
            .unwrap();
        dashboard.bind(&spec, &data).unwrap()
    }

    #[test]
    fn test_catalog_layout() {
        let widgets = Dashboard::default().widgets();
        assert_eq!(widgets.len(), 11);

        let revenue = widgets.iter().filter(|w| w.section == Section::Revenue).count();
        let tpv = widgets.iter().filter(|w| w.section == Section::Tpv).count();
        let margin = widgets.iter().filter(|w| w.section == Section::Margin).count();
        assert_eq!((revenue, tpv, margin), (4, 1, 6));

        let ids: Vec<&str> = widgets.iter().map(|w| w.id.as_str()).collect();
        assert!(ids.contains(&"netnet_margin_waterfall"));
        assert!(ids.contains(&"gross_margin_mom"));
    }

    #[test]
    fn test_stacked_series_follow_category_palette() {
        let widgets = Dashboard::default().widgets();
        let stacked = widgets
            .iter()
            .find(|w| w.chart == ChartKind::StackedBar)
            .unwrap();
        assert_eq!(stacked.series.len(), 8);
        for (i, series) in stacked.series.iter().enumerate() {
            assert_eq!(series.key, Category::ALL[i].as_str());
            assert_eq!(series.color, Palette::default().color(i));
        }
    }

    #[test]
    fn test_bind_net_vs_target() {
        let widget = bound("net_revenue_vs_target");
        assert_eq!(
            widget.labels,
            vec!["Jan (MTD)", "Feb (MTD)", "Mar (MTD)", "Apr (MTD)"]
        );
        assert_eq!(widget.series("net").unwrap().values[0], 98395.0);
        assert_eq!(widget.series("target").unwrap().values[3], 94948.0);
        assert_eq!(widget.series("target").unwrap().kind, SeriesKind::Line);
        assert_eq!(widget.format.apply(98395.0), "$98,395");
    }

    #[test]
    fn test_bind_monthly_stacked() {
        let widget = bound("netnet_revenue_monthly");
        assert_eq!(widget.labels.len(), 6);
        assert_eq!(widget.series("Alliance Partner").unwrap().values[0], 26033.0);
        assert_eq!(widget.series("TPI").unwrap().values[5], 14126.0);
    }

    #[test]
    fn test_bind_treemap_selected_quarter() {
        let widget = bound("netnet_revenue_quarterly");
        assert_eq!(widget.labels.len(), 8);
        assert_eq!(widget.point_colors.len(), 8);
        assert_eq!(widget.point_colors[5], Palette::default().color(5));

        let dashboard = Dashboard::default().with_treemap_quarter(Quarter::Q1);
        let data = DashboardGenerator::default().generate();
        let spec = dashboard
            .widgets()
            .into_iter()
            .find(|w| w.chart == ChartKind::Treemap)
            .unwrap();
        let q1 = dashboard.bind(&spec, &data).unwrap();
        assert_eq!(q1.series("size").unwrap().values[0], 148210.0);
    }

    #[test]
    fn test_bind_margins_and_tpv() {
        let widget = bound("gross_margin_mom");
        assert_eq!(widget.labels.len(), 12);
        assert_eq!(widget.series("gross").unwrap().values[0], 26.0);
        assert_eq!(widget.format.apply(26.0), "26%");

        let tpv = bound("tpv");
        assert_eq!(tpv.series("tpv").unwrap().values[0], 1924276.0);
        assert_eq!(tpv.format.apply(1924276.0), "1,924,276");
    }

    #[test]
    fn test_bind_waterfall() {
        let widget = bound("netnet_margin_waterfall");
        assert_eq!(widget.domain, Some([-2.0, 35.0]));
        assert_eq!(widget.labels[0], "Alliance Partner");
        assert_eq!(widget.series("delta").unwrap().values[2], -2.0);
        assert_eq!(widget.series("baseline").unwrap().values[2], 14.0);
        assert_eq!(widget.series("cumulative").unwrap().values[7], 33.0);
        assert_eq!(widget.format.apply(3.5999999999999996), "3.6%");
    }

    #[test]
    fn test_unknown_series_key_rejected() {
        let dashboard = Dashboard::default();
        let data = DashboardGenerator::default().generate();
        let mut spec = dashboard.widgets().remove(0);
        spec.series[0].key = "ebitda".to_string();

        let err = dashboard.bind(&spec, &data).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::UnknownSeriesKey { ref key, .. } if key == "ebitda"
        ));
    }

    #[test]
    fn test_bind_all_serializes() {
        let data = DashboardGenerator::default().generate();
        let widgets = Dashboard::default().bind_all(&data).unwrap();
        assert_eq!(widgets.len(), 11);

        let json = serde_json::to_value(&widgets).unwrap();
        assert_eq!(json[0]["format"]["style"], "currency");
        assert!(json[0].get("domain").is_none());
        assert_eq!(json[10]["domain"][1], widgets[10].domain.unwrap()[1]);
    }
}
