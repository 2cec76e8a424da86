//! # Unit Systems
//!
//! The calculator works in whatever consistent units the caller supplies:
//! force × length in, force·length out. `UnitSystem` only carries the labels
//! used when a result is printed; no conversion is ever applied.
//!
//! ## Example
//!
//! ```rust
//! use fem_core::units::UnitSystem;
//!
//! let units = UnitSystem::Metric;
//! assert_eq!(units.force(), "kN");
//! assert_eq!(units.moment(), "kN·m");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label set for a consistent force/length unit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// kN, m, kN·m
    #[default]
    Metric,
    /// kip, ft, kip·ft
    Imperial,
}

impl UnitSystem {
    /// Force unit label
    pub fn force(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kN",
            UnitSystem::Imperial => "kip",
        }
    }

    /// Length unit label
    pub fn length(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "ft",
        }
    }

    /// Moment unit label (force × length)
    pub fn moment(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kN·m",
            UnitSystem::Imperial => "kip·ft",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            other => Err(format!("unknown unit system '{}' (expected metric or imperial)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(UnitSystem::Imperial.force(), "kip");
        assert_eq!(UnitSystem::Imperial.length(), "ft");
        assert_eq!(UnitSystem::Imperial.moment(), "kip·ft");
    }

    #[test]
    fn test_parse() {
        assert_eq!("SI".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!(" imperial ".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn test_json_is_lowercase() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
        let back: UnitSystem = serde_json::from_str("\"metric\"").unwrap();
        assert_eq!(back, UnitSystem::Metric);
    }
}
