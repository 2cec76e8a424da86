//! # Equation Registry
//!
//! Metadata for every equation the calculator applies: formula text, variable
//! definitions, and the reference it comes from. Reports list these so a
//! reviewer can audit a result without reading the source.
//!
//! ## Usage
//!
//! ```rust
//! use fem_core::equations::registry::Equation;
//!
//! let meta = Equation::FemPointLoadNear.metadata();
//! println!("{}: {}", meta.name, meta.formula_plain);
//! assert_eq!(meta.source_function, "fem_point_load");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering text or standard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// Structural Analysis by R.C. Hibbeler
    Hibbeler {
        edition: u8,
        chapter: u8,
    },
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::Hibbeler { edition, chapter } => {
                format!("Hibbeler {}ed, Ch. {}", edition, chapter)
            }
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "M_A", "L", "P")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str) -> Self {
        Self { symbol, description }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Equations used by the fixed-end moment calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// M_A = -Pab^2/L^2
    FemPointLoadNear,
    /// M_B = -Pa^2b/L^2
    FemPointLoadFar,
    /// M = -PL/8 at midspan
    FemMidspanCheck,
}

/// Every registered equation, in report order
pub const ALL_EQUATIONS: [Equation; 3] = [
    Equation::FemPointLoadNear,
    Equation::FemPointLoadFar,
    Equation::FemMidspanCheck,
];

const FIXED_FIXED_ASSUMPTIONS: [&str; 3] = [
    "Both ends fixed against rotation and translation",
    "Linear elastic material",
    "Small deflections",
];

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::FemPointLoadNear => EquationMetadata {
                name: "Fixed-End Moment at A (Point Load)",
                formula_plain: "M_A = -P*a*b^2 / L^2",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 12 },
                variables: vec![
                    Variable::new("P", "Point load magnitude (positive downward)"),
                    Variable::new("a", "Distance from support A to load"),
                    Variable::new("b", "L - a, distance from support B to load"),
                    Variable::new("L", "Span length"),
                ],
                assumptions: FIXED_FIXED_ASSUMPTIONS.to_vec(),
                source_function: "fem_point_load",
            },

            Equation::FemPointLoadFar => EquationMetadata {
                name: "Fixed-End Moment at B (Point Load)",
                formula_plain: "M_B = -P*a^2*b / L^2",
                reference: CodeReference::Hibbeler { edition: 10, chapter: 12 },
                variables: vec![
                    Variable::new("P", "Point load magnitude (positive downward)"),
                    Variable::new("a", "Distance from support A to load"),
                    Variable::new("b", "L - a, distance from support B to load"),
                    Variable::new("L", "Span length"),
                ],
                assumptions: FIXED_FIXED_ASSUMPTIONS.to_vec(),
                source_function: "fem_point_load",
            },

            Equation::FemMidspanCheck => EquationMetadata {
                name: "Midspan Point Load Check",
                formula_plain: "M_A = M_B = -P*L/8",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1d" },
                variables: vec![
                    Variable::new("P", "Point load magnitude (positive downward)"),
                    Variable::new("L", "Span length"),
                ],
                assumptions: vec!["Load applied at a = L/2"],
                source_function: "fem_point_load_midspan",
            },
        }
    }
}

/// Equations applied for a single case, midspan check only when it was reported.
pub fn equations_for(midspan: bool) -> Vec<Equation> {
    ALL_EQUATIONS
        .iter()
        .copied()
        .filter(|eq| midspan || *eq != Equation::FemMidspanCheck)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_formula() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.formula_plain.is_empty(), "{:?}", eq);
            assert!(!meta.variables.is_empty(), "{:?}", eq);
        }
    }

    #[test]
    fn test_citation() {
        let meta = Equation::FemPointLoadNear.metadata();
        assert_eq!(meta.reference.citation(), "Hibbeler 10ed, Ch. 12");
    }

    #[test]
    fn test_equations_for() {
        assert_eq!(equations_for(false).len(), 2);
        assert!(equations_for(true).contains(&Equation::FemMidspanCheck));
    }
}
