//! # Report Settings
//!
//! Presentation options shared by the text report and case files. Every field
//! has a serde default, so a case file may omit `settings` entirely or any
//! part of it.
//!
//! ```rust
//! use fem_core::settings::ReportSettings;
//! use fem_core::units::UnitSystem;
//!
//! let settings: ReportSettings = serde_json::from_str(r#"{"units": "imperial"}"#).unwrap();
//! assert_eq!(settings.units, UnitSystem::Imperial);
//! assert_eq!(settings.decimals, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::UnitSystem;

/// Default number of decimals for printed moments
pub const DEFAULT_DECIMALS: usize = 4;

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Unit labels for printed values
    #[serde(default)]
    pub units: UnitSystem,

    /// Decimal places for moments
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// Append the equations used to the text report
    #[serde(default)]
    pub show_equations: bool,
}

fn default_decimals() -> usize {
    DEFAULT_DECIMALS
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            decimals: DEFAULT_DECIMALS,
            show_equations: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ReportSettings::default();
        assert_eq!(settings.units, UnitSystem::Metric);
        assert_eq!(settings.decimals, 4);
        assert!(!settings.show_equations);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let settings: ReportSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, ReportSettings::default());
    }
}
