//! Color theme for CLI output

use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Get color for a validation check outcome
    pub fn get_check_color(&self, passed: bool) -> TableColor {
        if passed {
            self.success
        } else {
            self.error
        }
    }

    /// Get color for a property's chart column: setup stages are
    /// highlighted, the base cluster definition stays muted.
    pub fn get_chart_color(&self, is_setup_stage: bool) -> TableColor {
        if is_setup_stage {
            self.info
        } else {
            self.muted
        }
    }
}
