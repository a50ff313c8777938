//! Table rendering for CLI output

use super::ColorTheme;
use crate::domain::instance::types::InstancePropertyValue;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render a template's aggregated properties as a formatted table
    pub fn render_properties(&self, properties: &[InstancePropertyValue]) -> String {
        if properties.is_empty() {
            return "No properties found in cluster template status".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("CHART").set_alignment(CellAlignment::Left),
                Cell::new("NAME").set_alignment(CellAlignment::Left),
                Cell::new("VALUE").set_alignment(CellAlignment::Left),
            ]);

        for property in properties {
            let chart = property
                .cluster_setup
                .as_deref()
                .unwrap_or("cluster definition");
            let chart_color = self.theme.get_chart_color(property.cluster_setup.is_some());

            table.add_row(vec![
                Cell::new(chart)
                    .fg(chart_color)
                    .set_alignment(CellAlignment::Left),
                Cell::new(&property.name).set_alignment(CellAlignment::Left),
                Cell::new(format_value(&property.value)).set_alignment(CellAlignment::Left),
            ]);
        }

        table.to_string()
    }
}

/// Render a YAML value as a single table cell
fn format_value(value: &serde_yaml::Value) -> String {
    use serde_yaml::Value;
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => serde_yaml::to_string(other)
            .map(|rendered| rendered.trim_end().to_string())
            .unwrap_or_else(|_| "<unrenderable>".to_string()),
    }
}
