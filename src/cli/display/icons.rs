//! Status icons for CLI output

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// Check passed
    pub const SUCCESS: &'static str = "✓";

    /// Non-fatal condition (e.g. a template with no properties)
    pub const WARNING: &'static str = "⚠";

    /// Check failed
    pub const ERROR: &'static str = "✗";

    /// Get icon for a validation check outcome
    pub fn get_check_icon(passed: bool) -> &'static str {
        if passed {
            Self::SUCCESS
        } else {
            Self::ERROR
        }
    }
}
