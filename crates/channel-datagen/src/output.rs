//! Output formats for generated dashboard data.

use crate::categories::Category;
use crate::error::Result;
use crate::generator::DashboardData;
use crate::waterfall::WaterfallResult;

// ----------------------------------------------------------------------------
// JSON Output
// ----------------------------------------------------------------------------

/// JSON output format - one document holding every dataset.
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    /// Create a new JSON formatter (pretty-printed by default).
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit compact single-line JSON.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Format all datasets.
    pub fn format(&self, data: &DashboardData) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------------------------------------
// CSV Output
// ----------------------------------------------------------------------------

/// CSV output format - one section per dataset, separated by a
/// `# <dataset>` marker line.
pub struct CsvOutput;

impl CsvOutput {
    pub fn new() -> Self {
        Self
    }

    /// Format the stacked monthly series: one row per month.
    pub fn format_monthly_series(&self, data: &DashboardData) -> String {
        let mut csv = String::new();
        let mut header = vec!["month".to_string()];
        header.extend(Category::ALL.iter().map(|c| escape(c.as_str())));
        csv.push_str(&header.join(","));
        csv.push('\n');

        for row in &data.monthly_series {
            let mut fields = vec![row.month.as_str().to_string()];
            fields.extend(row.amounts.iter().map(|(_, v)| v.to_string()));
            csv.push_str(&fields.join(","));
            csv.push('\n');
        }
        csv
    }

    /// Format the treemap flattened to `quarter,category,size`.
    pub fn format_treemap(&self, data: &DashboardData) -> String {
        let mut csv = String::from("quarter,category,size\n");
        for quarter in &data.quarterly_treemap {
            for leaf in quarter.children() {
                csv.push_str(&format!(
                    "{},{},{}\n",
                    escape(quarter.name()),
                    escape(leaf.name()),
                    leaf.size(),
                ));
            }
        }
        csv
    }

    /// Format month-over-month margins.
    pub fn format_margins(&self, data: &DashboardData) -> String {
        let mut csv = String::from("month,gross,net,netnet\n");
        for row in &data.margins {
            csv.push_str(&format!("{},{},{},{}\n", row.month, row.gross, row.net, row.netnet));
        }
        csv
    }

    /// Format month-to-date blocks.
    pub fn format_mtd_blocks(&self, data: &DashboardData) -> String {
        let mut csv = String::from("label,gross,net,netnet,tpv,target\n");
        for block in &data.mtd_blocks {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                escape(&block.label),
                block.gross,
                block.net,
                block.netnet,
                block.tpv,
                block.target,
            ));
        }
        csv
    }

    /// Format one waterfall as `key,label,category,start,value,end`.
    pub fn format_waterfall(&self, waterfall: &WaterfallResult) -> String {
        let mut csv = String::new();
        for segment in &waterfall.segments {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                waterfall.key,
                escape(&waterfall.label),
                escape(segment.name.as_str()),
                segment.start,
                segment.value,
                segment.end,
            ));
        }
        csv
    }

    /// Format every dataset.
    pub fn format_all(&self, data: &DashboardData) -> String {
        let mut csv = String::new();

        csv.push_str("# monthly_series\n");
        csv.push_str(&self.format_monthly_series(data));
        csv.push_str("\n# quarterly_treemap\n");
        csv.push_str(&self.format_treemap(data));
        csv.push_str("\n# margins\n");
        csv.push_str(&self.format_margins(data));
        csv.push_str("\n# mtd_blocks\n");
        csv.push_str(&self.format_mtd_blocks(data));
        csv.push_str("\n# waterfalls\n");
        csv.push_str("key,label,category,start,value,end\n");
        for waterfall in data.waterfalls.iter() {
            csv.push_str(&self.format_waterfall(waterfall));
        }

        csv
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a field when it contains a separator, quote or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
