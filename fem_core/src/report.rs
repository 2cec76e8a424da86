//! # Text Report
//!
//! Plain-text rendering of a fixed-end moment result for terminal output.
//!
//! ```rust
//! use fem_core::calculations::{calculate, FixedEndMomentInput};
//! use fem_core::report::render_text;
//! use fem_core::settings::ReportSettings;
//!
//! let result = calculate(&FixedEndMomentInput::midspan("", 10.0, 6.0)).unwrap();
//! let text = render_text(&result, &ReportSettings::default());
//! assert!(text.contains("Fixed-end moment at A (M_A) = -7.5000 kN·m"));
//! ```

use crate::calculations::fixed_end_moment::FixedEndMomentResult;
use crate::equations::registry::equations_for;
use crate::settings::ReportSettings;

const TITLE: &str = "=== Fixed-Fixed Beam: Point Load ===";

/// Render one result as a text block.
pub fn render_text(result: &FixedEndMomentResult, settings: &ReportSettings) -> String {
    let units = settings.units;
    let prec = settings.decimals;
    let mut lines: Vec<String> = vec![TITLE.to_string()];

    if !result.label.is_empty() {
        lines.push(format!("Case: {}", result.label));
    }
    lines.push(format!(
        "P = {} {}, L = {} {}, a = {} {}",
        result.load,
        units.force(),
        result.span,
        units.length(),
        result.position,
        units.length()
    ));
    lines.push(format!(
        "Fixed-end moment at A (M_A) = {:.*} {}",
        prec,
        result.m_a,
        units.moment()
    ));
    lines.push(format!(
        "Fixed-end moment at B (M_B) = {:.*} {}",
        prec,
        result.m_b,
        units.moment()
    ));

    if let Some(theo) = result.midspan_check {
        lines.push(format!("(Check) Midspan theoretical = {:.*} {}", prec, theo, units.moment()));
    }

    if settings.show_equations {
        lines.push(String::new());
        lines.push("Equations:".to_string());
        for eq in equations_for(result.midspan_check.is_some()) {
            let meta = eq.metadata();
            lines.push(format!(
                "  {} - {} [{}]",
                meta.name,
                meta.formula_plain,
                meta.reference.citation()
            ));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render several results separated by blank lines.
pub fn render_all(results: &[FixedEndMomentResult], settings: &ReportSettings) -> String {
    results
        .iter()
        .map(|r| render_text(r, settings))
        .collect::<Vec<_>>()
        .join("\n")
}
