//! Command bodies for `channel-dash`.
//!
//! Each `render_*` function returns the text the command prints so the
//! binary decides where it goes.

use anyhow::{Context, Result};
use channel_dashboard::{BoundWidget, Dashboard};
use channel_datagen::{
    CsvOutput, DashboardData, DashboardGenerator, DatagenConfig, JsonOutput, Quarter,
};
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Serialisation for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Resolve the effective configuration: file (or defaults), then the seed
/// flag on top.
pub fn load_config(path: Option<&Path>, seed: Option<u32>) -> Result<DatagenConfig> {
    let mut config = match path {
        Some(path) => DatagenConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DatagenConfig::default(),
    };

    if let Some(seed) = seed {
        config.seed = seed;
    }

    info!(seed = config.seed, "configuration resolved");
    Ok(config)
}

fn generate(config: DatagenConfig) -> DashboardData {
    DashboardGenerator::new(config).generate()
}

/// Body of `channel-dash generate`.
pub fn render_generate(
    config: DatagenConfig,
    format: OutputFormat,
    compact: bool,
) -> Result<String> {
    let data = generate(config);

    match format {
        OutputFormat::Json => {
            let output = if compact {
                JsonOutput::new().compact()
            } else {
                JsonOutput::new()
            };
            output
                .format(&data)
                .with_context(|| "Failed to serialise datasets as JSON")
        }
        OutputFormat::Csv => Ok(CsvOutput::new().format_all(&data)),
    }
}

#[derive(Serialize)]
struct LayoutDocument {
    seed: u32,
    treemap_quarter: Quarter,
    widgets: Vec<BoundWidget>,
}

/// Body of `channel-dash layout`: every widget bound to freshly generated
/// data, as pretty JSON.
pub fn render_layout(config: DatagenConfig, quarter: Quarter) -> Result<String> {
    let data = generate(config);
    let dashboard = Dashboard::default().with_treemap_quarter(quarter);
    let widgets = dashboard
        .bind_all(&data)
        .with_context(|| "Failed to bind widgets to generated data")?;

    let document = LayoutDocument {
        seed: data.seed,
        treemap_quarter: quarter,
        widgets,
    };
    serde_json::to_string_pretty(&document).with_context(|| "Failed to serialise layout")
}

/// Body of `channel-dash check`: generate, validate, and summarise.
pub fn render_check(config: DatagenConfig) -> Result<String> {
    let data = generate(config);
    data.validate()
        .with_context(|| format!("Generated data for seed {} is inconsistent", data.seed))?;

    let mut report = data.summary();
    report.push('\n');
    for waterfall in data.waterfalls.iter() {
        report.push_str(&format!(
            "  {:<7} {} segments, {} negative, total {}\n",
            waterfall.key.as_str(),
            waterfall.segments.len(),
            waterfall.negative_count(),
            channel_dashboard::format_number(waterfall.total),
        ));
    }
    report.push_str("OK\n");
    Ok(report)
}

/// Write to `path`, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = content.len(), "output written");
        }
        None => print!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_flag_overrides_default() {
        let config = load_config(None, Some(7)).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(load_config(None, None).unwrap().seed, 42);
    }

    #[test]
    fn test_missing_config_file_has_context() {
        let err = load_config(Some(Path::new("/nonexistent/channel.yml")), None).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_generate_json_reference_values() {
        let json = render_generate(DatagenConfig::default(), OutputFormat::Json, true).unwrap();
        assert!(!json.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["monthly_series"][0]["Alliance Partner"], 26033);
        assert_eq!(value["waterfalls"]["netnet"]["total"], 33.0);
    }

    #[test]
    fn test_generate_csv_sections() {
        let csv = render_generate(DatagenConfig::default(), OutputFormat::Csv, false).unwrap();
        assert!(csv.starts_with("# monthly_series\n"));
        assert!(csv.contains("\n# waterfalls\n"));
    }

    #[test]
    fn test_layout_document() {
        let json = render_layout(DatagenConfig::default(), Quarter::Q1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 42);
        assert_eq!(value["treemap_quarter"], "Q1");
        assert_eq!(value["widgets"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn test_check_report() {
        let report = render_check(DatagenConfig::default()).unwrap();
        assert!(report.starts_with("Seed 42:"));
        assert!(report.contains("netnet  8 segments, 1 negative, total 33"));
        assert!(report.ends_with("OK\n"));
    }
}
