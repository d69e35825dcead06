use anyhow::Result;
use std::path::Path;
use crate::types::AngularFeatures;

const COLUMN_WIDTHS: [usize; 8] = [40, 7, 12, 16, 14, 17, 18, 10];

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        ReportGenerator
    }

    pub fn generate_table_report(&self, features: &AngularFeatures, root: &Path) -> Result<String> {
        let mut report = String::new();

        report.push_str(&format!("Showing results for: {}\n\n", root.display()));
        report.push_str(&self.format_row(&[
            "Type",
            "Total",
            "Standalone",
            "Not Standalone",
            "Standalone %",
            "OnPush Strategy",
            "Default Strategy",
            "OnPush %",
        ]));
        report.push_str(&self.divider());

        report.push_str(&self.format_row(&["Modules", &features.modules.to_string()]));
        report.push_str(&self.format_row(&[
            "Services (Including other @Injectable)",
            &features.services.to_string(),
        ]));
        report.push_str(&self.format_row(&[
            "Components",
            &features.components.total.to_string(),
            &features.components.standalone.to_string(),
            &features.components.not_standalone.to_string(),
            &self.percentage(features.components.standalone, features.components.total),
            &features.components.on_push.to_string(),
            &features.components.default.to_string(),
            &self.percentage(features.components.on_push, features.components.total),
        ]));
        report.push_str(&self.format_row(&[
            "Directives",
            &features.directives.total.to_string(),
            &features.directives.standalone.to_string(),
            &features.directives.not_standalone.to_string(),
            &self.percentage(features.directives.standalone, features.directives.total),
        ]));
        report.push_str(&self.format_row(&[
            "Pipes",
            &features.pipes.total.to_string(),
            &features.pipes.standalone.to_string(),
            &features.pipes.not_standalone.to_string(),
            &self.percentage(features.pipes.standalone, features.pipes.total),
        ]));

        Ok(report)
    }

    pub fn generate_json_report(&self, features: &AngularFeatures) -> Result<String> {
        let json = serde_json::to_string_pretty(features)?;
        Ok(json)
    }

    fn format_row(&self, cells: &[&str]) -> String {
        let mut row = String::new();
        for (i, &width) in COLUMN_WIDTHS.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            if i == 0 {
                row.push_str(&format!("{:<width$}", cell, width = width));
            } else {
                row.push_str(&format!("{:>width$}", cell, width = width));
            }
        }
        row.push('\n');
        row
    }

    fn divider(&self) -> String {
        let total: usize = COLUMN_WIDTHS.iter().sum();
        format!("{}\n", "-".repeat(total))
    }

    fn percentage(&self, part: usize, total: usize) -> String {
        if total > 0 {
            format!("{:.2}%", part as f64 / total as f64 * 100.0)
        } else {
            "0%".to_string()
        }
    }
}
